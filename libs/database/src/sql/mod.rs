//! SeaORM connection management, health checks and schema application

mod config;
mod connector;
mod health;

pub use config::{SQLITE_MEMORY_URL, SqlConfig};
pub use connector::{
    connect, connect_from_config, connect_with_options, connect_with_retry, run_migrations,
};
pub use health::check_health;

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
