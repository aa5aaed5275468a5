//! Readiness endpoint

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::sql::check_health;

use crate::state::AppState;

/// Readiness probe: 200 once the database answers, 503 otherwise
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready"),
        (status = 503, description = "Database is unreachable")
    )
)]
pub async fn ready(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
