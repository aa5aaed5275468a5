//! Reusable OpenAPI response types for error documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "An internal server error occurred" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "Request validation failed",
        "details": {
            "name": [{ "code": "length", "message": "Name must be between 1 and 255 characters" }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid ID",
    content_type = "application/json",
    example = json!({ "error": "Invalid ID: abc" })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({ "error": "Service is temporarily unavailable" })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
