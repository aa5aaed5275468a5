use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Run `SELECT 1` against the connection's backend.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    let backend = db.get_database_backend();
    debug!(?backend, "Running database health check");

    db.query_one_raw(Statement::from_string(backend, "SELECT 1"))
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    Ok(())
}
