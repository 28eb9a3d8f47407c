//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers. The state owns the single item store for the process: it is
//! constructed and seeded once in `main`, before the listener binds, and
//! every handler reaches it through cheap clones of the service handle.

use domain_items::{InMemoryItemRepository, ItemService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Service over the process-wide in-memory item store
    pub items: ItemService<InMemoryItemRepository>,
}
