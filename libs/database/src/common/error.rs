/// Database error type shared by connection and health helpers
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "sql")]
    #[error("SQL error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
