//! Persisted filter state keyed by object type.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sift_core::{ObjectType, Result};
use tracing::{debug, warn};

use super::store::StateStore;
use crate::schema::{Clause, FilterSet, Polarity};

/// Default key the filter state is stored under.
pub const FILTER_STATE_KEY: &str = "savedFilters";

/// Last-used filter set per object type: `{"alerts": {...}, "events": {...}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedFilterState(IndexMap<ObjectType, FilterSet>);

impl PersistedFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, object: ObjectType) -> Option<&FilterSet> {
        self.0.get(&object)
    }

    /// Store the set for an object type. Empty fields are pruned first and an
    /// empty set clears the entry.
    pub fn set(&mut self, object: ObjectType, mut filters: FilterSet) {
        filters.prune();
        if filters.is_empty() {
            self.0.shift_remove(&object);
        } else {
            self.0.insert(object, filters);
        }
    }

    pub fn remove(&mut self, object: ObjectType) -> Option<FilterSet> {
        self.0.shift_remove(&object)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn save_filter_state(
    store: &dyn StateStore,
    key: &str,
    state: &PersistedFilterState,
) -> Result<()> {
    let json = serde_json::to_string(state)?;
    store.set(key, &json)?;
    debug!(key, bytes = json.len(), "saved filter state");
    Ok(())
}

/// Restore filter state. A missing key yields the empty state, and so does a
/// blob that is not filter-state JSON at all.
///
/// Inside a readable blob, clauses are revived one by one: a clause that no
/// longer deserializes (unknown kind, unparseable date) is dropped on its own,
/// as are entries for unknown object types.
pub fn load_filter_state(store: &dyn StateStore, key: &str) -> Result<PersistedFilterState> {
    let Some(json) = store.get(key)? else {
        debug!(key, "no saved filter state");
        return Ok(PersistedFilterState::new());
    };
    let blob: StoredState = match serde_json::from_str(&json) {
        Ok(blob) => blob,
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable filter state");
            return Ok(PersistedFilterState::new());
        }
    };

    let mut state = PersistedFilterState::new();
    for (object, fields) in blob {
        match object.parse::<ObjectType>() {
            Ok(object) => state.set(object, revive_filter_set(object, fields)),
            Err(e) => debug!(
                key,
                object = %object,
                error = %e,
                "dropping saved filters for unknown object type"
            ),
        }
    }
    Ok(state)
}

// ── Lenient revival ─────────────────────────────────────────────────

/// Saved blob with clauses left as raw JSON so each can fail independently.
type StoredState = IndexMap<String, IndexMap<String, StoredField>>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredField {
    #[serde(default)]
    included: Vec<Value>,
    #[serde(default)]
    not_included: Vec<Value>,
}

fn revive_filter_set(object: ObjectType, fields: IndexMap<String, StoredField>) -> FilterSet {
    let mut filters = FilterSet::new();
    for (name, field) in fields {
        for (polarity, clauses) in [
            (Polarity::Include, field.included),
            (Polarity::Exclude, field.not_included),
        ] {
            for raw in clauses {
                match serde_json::from_value::<Clause>(raw) {
                    Ok(clause) => filters.push(&name, polarity, clause),
                    Err(e) => debug!(
                        %object,
                        field = %name,
                        error = %e,
                        "dropping unreadable saved clause"
                    ),
                }
            }
        }
    }
    filters
}
