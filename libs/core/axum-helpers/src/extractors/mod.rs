//! Custom extractors for Axum handlers.
//!
//! Rejections are rendered through [`AppError`](crate::errors::AppError) so
//! every failure has the standard JSON error body.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
