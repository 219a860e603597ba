//! Shared application state handed to every request handler.

use std::sync::Arc;

use crate::dao::vote_store::SqliteVoteStore;

/// Cheaply clonable handle on the application state.
pub type SharedState = Arc<AppState>;

/// Central application state holding the persistent vote store.
pub struct AppState {
    store: SqliteVoteStore,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: SqliteVoteStore) -> SharedState {
        Arc::new(Self { store })
    }

    /// Handle on the vote store backing every operation.
    pub fn store(&self) -> &SqliteVoteStore {
        &self.store
    }
}
