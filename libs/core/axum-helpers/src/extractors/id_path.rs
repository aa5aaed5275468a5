//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extracts a single `{id}` path segment as an `i32`.
///
/// Anything that is not a base-10 `i32` is rejected with
/// 400 `{"error": "Invalid ID: <raw>"}`.
///
/// ```ignore
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidId(raw).into_response())
    }
}
