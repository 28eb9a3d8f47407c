//! JSON body extractor with structured rejection responses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor that renders rejections as structured errors.
///
/// Bodies that parse but do not match the target type are rejected with
/// 422 before any domain code runs; syntactically broken JSON is a 400.
/// The status comes from axum's rejection, only the body shape is
/// normalized here.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateItem {
///     name: String,
///     price: f64,
/// }
///
/// async fn create_item(JsonBody(payload): JsonBody<CreateItem>) -> String {
///     format!("Creating item: {}", payload.name)
/// }
///
/// let app = Router::new().route("/items", post(create_item));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(data)) => Ok(JsonBody(data)),
            Err(rejection) => Err(AppError::from(rejection).into_response()),
        }
    }
}
