use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SiftError;

/// Collections an analyst can filter. Each has its own descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Alerts,
    Events,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Alerts => write!(f, "alerts"),
            ObjectType::Events => write!(f, "events"),
        }
    }
}

impl FromStr for ObjectType {
    type Err = SiftError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alerts" | "alert" => Ok(ObjectType::Alerts),
            "events" | "event" => Ok(ObjectType::Events),
            _ => Err(SiftError::UnknownObjectType(s.to_string())),
        }
    }
}

/// Sub-queue an alert list is viewed through. External queues expose fewer filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueVariant {
    Internal,
    External,
}

impl fmt::Display for QueueVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueVariant::Internal => write!(f, "internal"),
            QueueVariant::External => write!(f, "external"),
        }
    }
}

impl FromStr for QueueVariant {
    type Err = SiftError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(QueueVariant::Internal),
            "external" => Ok(QueueVariant::External),
            _ => Err(SiftError::UnknownQueue(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_parses_singular_and_plural() {
        assert_eq!("alerts".parse::<ObjectType>().unwrap(), ObjectType::Alerts);
        assert_eq!("Event".parse::<ObjectType>().unwrap(), ObjectType::Events);
        assert!(matches!(
            "incidents".parse::<ObjectType>(),
            Err(SiftError::UnknownObjectType(_))
        ));
    }

    #[test]
    fn queue_variant_round_trips_through_display() {
        for q in [QueueVariant::Internal, QueueVariant::External] {
            assert_eq!(q.to_string().parse::<QueueVariant>().unwrap(), q);
        }
        assert!("shared".parse::<QueueVariant>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ObjectType::Events).unwrap();
        assert_eq!(json, "\"events\"");
    }
}
