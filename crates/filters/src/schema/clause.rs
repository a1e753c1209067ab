//! Clause values: one decoded criterion for a filter field.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::kind::FilterKind;
use super::reference::ReferenceItem;

/// A single criterion. The variant mirrors the field's [`FilterKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Clause {
    Text(String),
    Select(ReferenceItem),
    /// Resolved items of one occurrence; the group matches if any item matches.
    MultiSelect(Vec<ReferenceItem>),
    Chips(Vec<String>),
    Date(#[serde(with = "crate::datetime::serde_iso")] NaiveDateTime),
    CategorizedValue {
        category: ReferenceItem,
        value: String,
    },
}

impl Clause {
    pub fn kind(&self) -> FilterKind {
        match self {
            Clause::Text(_) => FilterKind::Text,
            Clause::Select(_) => FilterKind::Select,
            Clause::MultiSelect(_) => FilterKind::MultiSelect,
            Clause::Chips(_) => FilterKind::Chips,
            Clause::Date(_) => FilterKind::Date,
            Clause::CategorizedValue { .. } => FilterKind::CategorizedValue,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Clause::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&NaiveDateTime> {
        match self {
            Clause::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[ReferenceItem]> {
        match self {
            Clause::MultiSelect(items) => Some(items),
            Clause::Select(item) => Some(std::slice::from_ref(item)),
            _ => None,
        }
    }
}
