//! Application state with a shared item store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` so every
//! handler gets exclusive access for the duration of its store operation.
//! Uses `tokio::sync::Mutex` so handlers await the lock without blocking the
//! tokio runtime.

use std::sync::Arc;

use itemhub_store::{IdPolicy, InMemoryStore};

/// Shared application state for the HTTP server.
///
/// Each `AppState` owns an independent store; tests build a fresh one per
/// router instead of clearing shared state.
#[derive(Clone, Default)]
pub struct AppState {
    /// The item collection (async Mutex -- non-blocking await).
    pub store: Arc<tokio::sync::Mutex<InMemoryStore>>,
}

impl AppState {
    /// Creates a new `AppState` with an empty store using `policy`.
    pub fn new(policy: IdPolicy) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(InMemoryStore::with_policy(policy))),
        }
    }
}
