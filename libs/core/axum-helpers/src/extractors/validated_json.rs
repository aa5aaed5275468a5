//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserialization failures keep the status chosen by axum's `Json`
/// rejection (400, 415 or 422); validation failures are 400 with the
/// per-field messages under `details`.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateCategory {
///     #[validate(length(min = 1, max = 255))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateCategory>) -> String {
///     payload.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
