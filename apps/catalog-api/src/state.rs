//! Application state management

use database::sql::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
