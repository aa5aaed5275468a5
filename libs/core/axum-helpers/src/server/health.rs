use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// A boxed readiness probe; `Err` carries the reason it failed.
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Run readiness probes concurrently and aggregate them into one response.
///
/// 200 `{"status": "ready", "<name>": "connected", ...}` when every probe
/// passes, otherwise 503 with `"not ready"` and the failing probes marked
/// `"disconnected"`.
///
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture)> = vec![(
///     "database",
///     Box::pin(async { check_health(&db).await.map_err(|e| e.to_string()) }),
/// )];
/// run_health_checks(checks).await
/// ```
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture<'_>)>) -> Response {
    let (names, probes): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let results = join_all(probes).await;

    let mut body = Map::new();
    let mut all_healthy = true;

    for (name, result) in names.into_iter().zip(results) {
        let state = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!(check = name, error = %e, "Readiness check failed");
                all_healthy = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(state));
    }

    body.insert(
        "status".to_string(),
        json!(if all_healthy { "ready" } else { "not ready" }),
    );

    let status = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(Value::Object(body))).into_response()
}

/// Liveness handler: always 200 while the process is serving requests.
pub async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    })
}

/// Router exposing `GET /health`.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
