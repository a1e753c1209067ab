//! Persisted filter state.
//!
//! The last-used filter set of each object type is kept under one fixed key
//! in a string store, restored at start-up. Dates revive through the same
//! ISO-8601 parser the decoder uses; reference items come back as saved and
//! can be re-resolved with [`crate::refresh_filters`].

mod state;
mod store;

#[cfg(test)]
mod tests;

pub use self::state::{load_filter_state, save_filter_state, PersistedFilterState, FILTER_STATE_KEY};
pub use self::store::{FileStore, MemoryStore, StateStore};
