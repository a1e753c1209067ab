//! Reference resolution adapter.
//!
//! The engine never fetches reference data. Callers hand it a resolver over
//! whatever snapshot the surrounding application has already populated; a
//! collection that has not loaded yet simply resolves nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sift_core::Result;

use crate::schema::{ReferenceBinding, ReferenceItem, ReferenceProvider};

/// Read-only access to reference collections.
pub trait ReferenceResolver {
    /// Current items of a provider. Empty when the collection is not populated.
    fn items(&self, provider: ReferenceProvider) -> &[ReferenceItem];

    /// First item whose lookup property equals `token`.
    fn resolve(&self, binding: &ReferenceBinding, token: &str) -> Option<ReferenceItem> {
        self.items(binding.provider)
            .iter()
            .find(|item| item.matches(binding.lookup_key, token))
            .cloned()
    }
}

/// In-memory snapshot of reference collections keyed by provider.
///
/// Serialized as `{"users": [...], "tags": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSnapshot {
    collections: HashMap<ReferenceProvider, Vec<ReferenceItem>>,
}

impl ReferenceSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, provider: ReferenceProvider, items: Vec<ReferenceItem>) -> Self {
        self.insert(provider, items);
        self
    }

    /// Replace a provider's collection.
    pub fn insert(&mut self, provider: ReferenceProvider, items: Vec<ReferenceItem>) {
        self.collections.insert(provider, items);
    }

    pub fn is_populated(&self, provider: ReferenceProvider) -> bool {
        self.collections.contains_key(&provider)
    }
}

impl ReferenceResolver for ReferenceSnapshot {
    fn items(&self, provider: ReferenceProvider) -> &[ReferenceItem] {
        self.collections
            .get(&provider)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<ReferenceItem> {
        vec![
            ReferenceItem::new().with("id", 7).with("username", "jdoe"),
            ReferenceItem::new().with("id", 9).with("username", "asmith"),
        ]
    }

    #[test]
    fn resolves_by_lookup_key() {
        let snapshot = ReferenceSnapshot::new().with(ReferenceProvider::Users, users());
        let binding = ReferenceBinding::keyed(ReferenceProvider::Users, "username");

        let item = snapshot.resolve(&binding, "asmith").unwrap();
        assert_eq!(item.lookup("id").as_deref(), Some("9"));
        assert!(snapshot.resolve(&binding, "nobody").is_none());
    }

    #[test]
    fn numeric_ids_match_text_tokens() {
        let snapshot = ReferenceSnapshot::new().with(ReferenceProvider::Users, users());
        let binding = ReferenceBinding::keyed(ReferenceProvider::Users, "id");
        let item = snapshot.resolve(&binding, "7").unwrap();
        assert_eq!(item.lookup("username").as_deref(), Some("jdoe"));
    }

    #[test]
    fn unpopulated_provider_resolves_nothing() {
        let snapshot = ReferenceSnapshot::new();
        let binding = ReferenceBinding::new(ReferenceProvider::Tags);
        assert!(!snapshot.is_populated(ReferenceProvider::Tags));
        assert!(snapshot.items(ReferenceProvider::Tags).is_empty());
        assert!(snapshot.resolve(&binding, "phishing").is_none());
    }

    #[test]
    fn loads_from_json() {
        let snapshot = ReferenceSnapshot::from_json(
            r#"{
                "tags": [{"value": "phishing", "name": "Phishing"}],
                "observableTypes": [{"value": "ipv4"}, {"value": "file"}]
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.items(ReferenceProvider::Tags).len(), 1);
        assert_eq!(snapshot.items(ReferenceProvider::ObservableTypes).len(), 2);
        assert_eq!(
            snapshot.items(ReferenceProvider::Tags)[0].label(),
            Some("Phishing")
        );
    }

    #[test]
    fn rejects_unknown_provider_in_json() {
        assert!(ReferenceSnapshot::from_json(r#"{"planets": []}"#).is_err());
    }
}
