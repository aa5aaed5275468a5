//! Database connectivity for the catalog services
//!
//! Wraps SeaORM connection setup, startup retry, health checks and schema
//! application behind a small API so apps and tests connect the same way.
//!
//! # Features
//!
//! - `sql` (default) - SeaORM backed connections (Postgres and SQLite)
//! - `config` - `core_config::FromEnv` for [`sql::SqlConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::sql::{self, SqlConfig};
//! use migration::Migrator;
//!
//! let db = sql::connect_with_retry(SqlConfig::new(url), None).await?;
//! sql::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;

#[cfg(feature = "sql")]
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};
