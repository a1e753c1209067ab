//! Reference data shapes: provider handles, items, lookup bindings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Property used for equality lookups when a descriptor does not name one.
pub const DEFAULT_LOOKUP_KEY: &str = "value";

/// External reference-data collections a filter field can resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceProvider {
    Users,
    Queues,
    Tags,
    ObservableTypes,
    Sources,
    Severities,
    Statuses,
}

impl fmt::Display for ReferenceProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceProvider::Users => write!(f, "users"),
            ReferenceProvider::Queues => write!(f, "queues"),
            ReferenceProvider::Tags => write!(f, "tags"),
            ReferenceProvider::ObservableTypes => write!(f, "observableTypes"),
            ReferenceProvider::Sources => write!(f, "sources"),
            ReferenceProvider::Severities => write!(f, "severities"),
            ReferenceProvider::Statuses => write!(f, "statuses"),
        }
    }
}

/// One row of reference data (a user, a tag, a queue...).
///
/// Items are opaque property bags owned by the reference collaborator; the
/// engine only reads the lookup property and, for display, `label`/`name`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceItem(Map<String, Value>);

impl ReferenceItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property setter, mostly for fixtures.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Property as text. Numbers and booleans use their JSON text so numeric
    /// ids compare equal to their query-string tokens.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn matches(&self, key: &str, token: &str) -> bool {
        match self.0.get(key) {
            Some(Value::String(s)) => s == token,
            Some(Value::Number(n)) => n.to_string() == token,
            Some(Value::Bool(b)) => b.to_string() == token,
            _ => false,
        }
    }

    /// Human-readable name, if the item carries one.
    pub fn label(&self) -> Option<&str> {
        self.0
            .get("label")
            .or_else(|| self.0.get("name"))
            .and_then(Value::as_str)
    }

    /// True for synthetic placeholder items produced by a [`Sentinel`].
    pub fn is_sentinel(&self) -> bool {
        matches!(self.0.get("sentinel"), Some(Value::Bool(true)))
    }
}

impl From<Map<String, Value>> for ReferenceItem {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Which collection a field resolves against, and by which property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceBinding {
    pub provider: ReferenceProvider,
    pub lookup_key: &'static str,
}

impl ReferenceBinding {
    pub const fn new(provider: ReferenceProvider) -> Self {
        Self {
            provider,
            lookup_key: DEFAULT_LOOKUP_KEY,
        }
    }

    pub const fn keyed(provider: ReferenceProvider, lookup_key: &'static str) -> Self {
        Self {
            provider,
            lookup_key,
        }
    }
}

/// Raw value of a `Select` field that stands for "no value" (e.g. unassigned owner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    pub raw: &'static str,
    pub label: &'static str,
}

impl Sentinel {
    pub const fn new(raw: &'static str, label: &'static str) -> Self {
        Self { raw, label }
    }

    /// Synthetic placeholder item. Carries the raw value under the lookup key
    /// so the encoder emits it unchanged.
    pub fn item(&self, lookup_key: &str) -> ReferenceItem {
        ReferenceItem::new()
            .with(lookup_key, self.raw)
            .with("label", self.label)
            .with("sentinel", true)
    }
}
