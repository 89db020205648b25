//! API handlers for the Warren web surface.

pub mod replies;
pub mod threads;

pub use replies::*;
pub use threads::*;

use crate::Store;

/// State shared across all handlers.
pub struct AppState {
    /// The thread document store.
    pub store: Store,
}

impl AppState {
    /// Create application state over a store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
