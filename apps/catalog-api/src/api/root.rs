//! Root route

use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct WelcomeMessage {
    pub message: String,
}

/// Create the root router
pub fn router() -> Router {
    Router::new().route("/", get(welcome))
}

/// Welcome message for the API root
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeMessage)
    )
)]
pub async fn welcome() -> Json<WelcomeMessage> {
    Json(WelcomeMessage {
        message: "Welcome to the RESTful API do Mackenzie!".to_string(),
    })
}
