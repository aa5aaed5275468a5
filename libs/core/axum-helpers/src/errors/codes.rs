//! Type-safe error codes attached to every logged API error.
//!
//! Each code carries
//! - a SCREAMING_SNAKE_CASE identifier (e.g. "VALIDATION_ERROR")
//! - an integer for log queries and alerting (e.g. 1001)
//! - a default human-readable message
//!
//! Codes are emitted as the `error_code` field of the error log line; the
//! response body only carries the message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed field validation
    ValidationError,

    /// Path identifier is not a valid integer id
    InvalidId,

    /// Request body could not be extracted as JSON
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Request was well-formed but rejected by a business rule
    BadRequest,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// A query or statement failed
    DatabaseError,

    /// No connection could be acquired from the pool
    DatabaseUnavailable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnavailable => "DATABASE_UNAVAILABLE",
        }
    }

    /// Integer code for structured logs.
    ///
    /// Ranges: 1000-1999 request and service errors, 2000-2999 database errors.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,
            Self::ServiceUnavailable => 1011,
            Self::DatabaseError => 2003,
            Self::DatabaseUnavailable => 2013,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid ID format",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "The requested resource was not found",
            Self::BadRequest => "Bad request",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "An internal server error occurred",
            Self::DatabaseUnavailable => "Service is temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
