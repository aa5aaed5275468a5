use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

pub const DUPLICATE_NAME_MESSAGE: &str = "Product with this name already exists";
pub const INVALID_PRICE_MESSAGE: &str = "Price must be a number";
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found";
pub const CATEGORY_NOT_FOUND_MESSAGE: &str = "Category not found";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Product with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Price is not a number")]
    InvalidPrice,

    #[error("Category not found: {0}")]
    CategoryNotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(PRODUCT_NOT_FOUND_MESSAGE.to_string()),
            ProductError::DuplicateName(_) => AppError::BadRequest(DUPLICATE_NAME_MESSAGE.to_string()),
            ProductError::InvalidPrice => AppError::BadRequest(INVALID_PRICE_MESSAGE.to_string()),
            ProductError::CategoryNotFound(_) => {
                AppError::BadRequest(CATEGORY_NOT_FOUND_MESSAGE.to_string())
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
