//! Configuration for the catalog API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sql::SqlConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqlConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: SqlConfig::from_env()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
