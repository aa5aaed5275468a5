//! API routes module

pub mod health;

use axum::Router;
use domain_products::{ProductService, SqlProductRepository, handlers};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let repository = SqlProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service).merge(health::router(state.clone()))
}
