use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Combine API routes with documentation and cross-cutting middleware.
///
/// Sets up:
/// - OpenAPI documentation: Swagger UI (`/swagger-ui`), ReDoc (`/redoc`),
///   RapiDoc (`/rapidoc`), Scalar (`/scalar`), raw document at `/api-docs/openapi.json`
/// - API routes merged at the root, so a domain router's `/products` stays `/products`
/// - JSON 404 fallback
/// - Request tracing, per-request timeout, security headers, CORS (when
///   origins are configured) and response compression
///
/// Domain routers apply their own state before being passed in.
///
/// # Errors
/// Fails if `server_config.cors_allowed_origins` contains a value that is
/// not a valid header value.
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(&server_config.cors_allowed_origins)?;
    match &cors_layer {
        Some(_) => info!(
            origins = ?server_config.cors_allowed_origins,
            "CORS enabled"
        ),
        None => info!("CORS_ALLOWED_ORIGIN not set, cross-origin requests are not allowed"),
    }

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(middleware::from_fn(security_headers));

    let router = match cors_layer {
        Some(cors) => router.layer(cors),
        None => router,
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained by axum's graceful shutdown; `cleanup`
/// (closing the database pool, for example) is given at most
/// `shutdown_timeout` before the process moves on.
///
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();
    let cleanup_trigger = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        cleanup_trigger.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // A serve error never reaches a signal, so release the cleanup task too.
    if serve_result.is_err() {
        cleanup_handle.abort();
    } else {
        cleanup_handle.await.ok();
    }

    serve_result
}
