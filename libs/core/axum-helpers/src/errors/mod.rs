pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// { "error": "Product not found" }
/// ```
///
/// `details` is present only when there is structured information to add,
/// such as the per-field messages of a failed validation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this type; each variant
/// chooses the status code, the client message and the log level.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, body) = match self {
            AppError::Database(e) => map_db_error(&e),
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {}",
                    e
                );
                (
                    e.status(),
                    ErrorCode::JsonExtraction,
                    ErrorResponse::new(e.body_text()),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    ErrorResponse::new(ErrorCode::ValidationError.default_message())
                        .with_details(validation_details(&e)),
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), id = %raw, "Invalid ID");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    ErrorResponse::new(format!("Invalid ID: {}", raw)),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, ErrorResponse::new(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, ErrorResponse::new(msg))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorResponse::new(ErrorCode::InternalError.default_message()),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ServiceUnavailable,
                    ErrorResponse::new(msg),
                )
            }
        };

        tracing::debug!(status = status.as_u16(), error = code.as_str(), "Returning error response");
        (status, Json(body)).into_response()
    }
}

/// Map a SeaORM error onto a 5xx response. The error text is only logged.
fn map_db_error(e: &DbErr) -> (StatusCode, ErrorCode, ErrorResponse) {
    let (status, code) = match e {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseUnavailable)
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError),
    };

    tracing::error!(error_code = code.code(), "Database error: {}", e);
    (status, code, ErrorResponse::new(code.default_message()))
}

/// `{ "field": [{ "code": "...", "message": "..." }] }` for each invalid field.
fn validation_details(errors: &ValidationErrors) -> Value {
    let fields: Map<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let entries: Vec<Value> = errs
                .iter()
                .map(|err| json!({ "code": err.code, "message": err.message }))
                .collect();
            (field.to_string(), Value::Array(entries))
        })
        .collect();

    Value::Object(fields)
}
