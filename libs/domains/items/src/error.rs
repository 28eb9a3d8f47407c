use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors produced by the items domain.
///
/// NotFound is the only failure the store can signal; malformed request
/// bodies are rejected at the extraction boundary before the store is
/// invoked.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i64),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// 404 body for id-addressed operations.
///
/// Clients depend on this exact shape, so it does not go through the
/// shared `ErrorResponse` structure.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundDetail {
    #[schema(example = "Item not found")]
    pub detail: String,
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        match self {
            ItemError::NotFound(id) => {
                tracing::info!(item_id = id, "item not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(NotFoundDetail {
                        detail: "Item not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
