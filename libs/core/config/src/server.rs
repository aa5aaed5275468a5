use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means no CORS layer is installed.
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            ..Self::default()
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to 0.0.0.0 (all interfaces)
    /// - PORT: defaults to 8080
    /// - CORS_ALLOWED_ORIGIN: comma-separated origins, defaults to none
    /// - REQUEST_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("PORT", "8080")?;
        let request_timeout_secs = env_parse("REQUEST_TIMEOUT_SECS", "30")?;

        let cors_allowed_origins = env_or_default("CORS_ALLOWED_ORIGIN", "")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            request_timeout_secs,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            cors_allowed_origins: Vec::new(),
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = ["HOST", "PORT", "CORS_ALLOWED_ORIGIN", "REQUEST_TIMEOUT_SECS"];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars(unset_all(), || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert_eq!(config.address(), "0.0.0.0:8080");
            assert!(config.cors_allowed_origins.is_empty());
            assert_eq!(config.request_timeout(), Duration::from_secs(30));
        });
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("3000")),
                (
                    "CORS_ALLOWED_ORIGIN",
                    Some("http://localhost:3000, https://shop.example.com,"),
                ),
                ("REQUEST_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
                assert_eq!(
                    config.cors_allowed_origins,
                    vec!["http://localhost:3000", "https://shop.example.com"]
                );
                assert_eq!(config.request_timeout_secs, 5);
            },
        );
    }

    #[test]
    fn test_server_config_from_env_invalid_port() {
        temp_env::with_vars(
            [("HOST", None), ("PORT", Some("not-a-port"))],
            || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("PORT"));
            },
        );
    }

    #[test]
    fn test_server_config_new_keeps_defaults() {
        let config = ServerConfig::new("localhost".to_string(), 9000);
        assert_eq!(config.address(), "localhost:9000");
        assert_eq!(config.request_timeout_secs, 30);
    }
}
