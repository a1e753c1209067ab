//! Filter fields and filter sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::clause::Clause;

/// Which side of a field a clause belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// `included`: a record must match at least one clause.
    Include,
    /// `notIncluded`: a record must match none of the clauses.
    Exclude,
}

/// Included and excluded clauses for one field.
///
/// Clauses within one list are alternatives (OR); the two lists are ANDed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterField {
    #[serde(default)]
    pub included: Vec<Clause>,
    #[serde(default)]
    pub not_included: Vec<Clause>,
}

impl FilterField {
    pub fn push(&mut self, polarity: Polarity, clause: Clause) {
        self.clauses_mut(polarity).push(clause);
    }

    pub fn clauses(&self, polarity: Polarity) -> &[Clause] {
        match polarity {
            Polarity::Include => &self.included,
            Polarity::Exclude => &self.not_included,
        }
    }

    pub fn clauses_mut(&mut self, polarity: Polarity) -> &mut Vec<Clause> {
        match polarity {
            Polarity::Include => &mut self.included,
            Polarity::Exclude => &mut self.not_included,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.not_included.is_empty()
    }
}

/// Filter field name → clauses. Absent names impose no constraint.
///
/// Insertion-ordered so re-encoding keeps the order parameters arrived in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(IndexMap<String, FilterField>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause, creating the field on first use.
    pub fn push(&mut self, name: &str, polarity: Polarity, clause: Clause) {
        self.field_mut(name).push(polarity, clause);
    }

    pub fn get(&self, name: &str) -> Option<&FilterField> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FilterField> {
        self.0.get_mut(name)
    }

    /// Get-or-create access for the presentation layer.
    pub fn field_mut(&mut self, name: &str) -> &mut FilterField {
        self.0.entry(name.to_string()).or_default()
    }

    pub fn insert(&mut self, name: &str, field: FilterField) -> Option<FilterField> {
        self.0.insert(name.to_string(), field)
    }

    pub fn remove(&mut self, name: &str) -> Option<FilterField> {
        self.0.shift_remove(name)
    }

    /// Remove one clause by position. Drops the field once it is empty.
    pub fn remove_clause(&mut self, name: &str, polarity: Polarity, index: usize) -> Option<Clause> {
        let field = self.0.get_mut(name)?;
        let clauses = field.clauses_mut(polarity);
        if index >= clauses.len() {
            return None;
        }
        let removed = clauses.remove(index);
        if field.is_empty() {
            self.0.shift_remove(name);
        }
        Some(removed)
    }

    /// Drop fields with no clauses on either side.
    pub fn prune(&mut self) {
        self.0.retain(|_, field| !field.is_empty());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterField)> {
        self.0.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
