//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    items: usize,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - the store lives in process memory, so the service is
/// ready as soon as the state exists; the record count doubles as a
/// store-health signal.
async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let items = state
        .items
        .list_items()
        .await
        .map(|records| records.len())
        .unwrap_or(0);

    Json(ReadyResponse {
        status: "ready".to_string(),
        items,
    })
}
