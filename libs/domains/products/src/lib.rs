//! Products Domain
//!
//! Product catalog: products with a unique name, a numeric price and an
//! optional category.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /products, /products/{id}, /categories
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation order, price parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and SeaORM implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Entity    │  ← `products` / `categories` tables
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod price;
pub mod repository;
pub mod service;
pub mod sql;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Category, CreateCategory, CreateProduct, NewProduct, Product, ProductFilter};
pub use price::Price;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use sql::SqlProductRepository;
