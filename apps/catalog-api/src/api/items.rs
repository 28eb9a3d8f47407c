//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::handlers;

use crate::state::AppState;

/// Create items router over the application's store
pub fn router(state: &AppState) -> Router {
    // The service handle is a cheap clone; every route shares the one store
    handlers::router(state.items.clone())
}
