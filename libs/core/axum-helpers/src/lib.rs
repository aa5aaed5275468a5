//! Shared Axum building blocks for the catalog services.
//!
//! - [`errors`]: `AppError`, the `{"error": ...}` response body and error codes
//! - [`extractors`]: `ValidatedJson` and `IdPath`
//! - [`http`]: CORS and security header middleware
//! - [`server`]: router assembly with API docs, health endpoints, graceful shutdown
//!
//! ```rust,ignore
//! use axum_helpers::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(domain_routes, &config.server)?
//!     .merge(health_router(config.app));
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};
