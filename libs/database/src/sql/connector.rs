use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::SqlConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect with the default pool settings of [`SqlConfig`].
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(SqlConfig::new(database_url)).await
}

pub async fn connect_from_config(config: SqlConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Connected to database");
    Ok(db)
}

/// Connect, retrying transient failures with exponential backoff.
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_with_retry(
    config: SqlConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();
    let attempt = || connect_with_options(options.clone());

    match retry_config {
        Some(policy) => retry_with_backoff(attempt, policy).await,
        None => retry(attempt).await,
    }
}

/// Apply every pending migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Applying database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Database schema is up to date");
    Ok(())
}
