//! API routes module
//!
//! This module defines all HTTP API routes for the catalog API.

pub mod health;
pub mod items;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Create all API routes, mounted at the application root
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .nest("/items", items::router(state))
        .merge(health::router(state.clone()))
}
