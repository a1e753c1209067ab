use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("Unknown queue variant: {0}")]
    UnknownQueue(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for SiftError {
    fn from(e: serde_json::Error) -> Self {
        SiftError::Serialize(e.to_string())
    }
}

/// Result alias for fallible edge operations (stores, fixtures, enum parsing).
pub type Result<T> = std::result::Result<T, SiftError>;
