//! Filter kind enum governing clause shape and default codec.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported filter field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    Text,
    Select,
    MultiSelect,
    Chips,
    Date,
    CategorizedValue,
}

impl FilterKind {
    /// Whether fields of this kind resolve raw tokens against reference data.
    pub fn uses_reference(&self) -> bool {
        matches!(
            self,
            FilterKind::Select | FilterKind::MultiSelect | FilterKind::CategorizedValue
        )
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Text => write!(f, "Text"),
            FilterKind::Select => write!(f, "Select"),
            FilterKind::MultiSelect => write!(f, "MultiSelect"),
            FilterKind::Chips => write!(f, "Chips"),
            FilterKind::Date => write!(f, "Date"),
            FilterKind::CategorizedValue => write!(f, "CategorizedValue"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Text" => Ok(FilterKind::Text),
            "Select" => Ok(FilterKind::Select),
            "MultiSelect" => Ok(FilterKind::MultiSelect),
            "Chips" => Ok(FilterKind::Chips),
            "Date" => Ok(FilterKind::Date),
            "CategorizedValue" => Ok(FilterKind::CategorizedValue),
            other => Err(format!("unknown filter kind: '{}'", other)),
        }
    }
}
