use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

const DEVELOPMENT_FILTER: &str = "debug,tower_http=debug,sea_orm=info,sqlx=warn";
const PRODUCTION_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware output and span trace capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON lines without
///   module targets, for log aggregation.
/// - **Development** (default): pretty, human-readable output.
///
/// `RUST_LOG` overrides the default filter in both modes. Both modes install
/// `tracing_error::ErrorLayer` so eyre reports carry the active span trace.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if is_production {
            PRODUCTION_FILTER
        } else {
            DEVELOPMENT_FILTER
        })
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_multiple_calls() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }

    #[test]
    fn test_init_tracing_with_rust_log_env() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Production);
        });
    }

    #[test]
    fn test_default_filters_parse() {
        assert!(EnvFilter::try_new(DEVELOPMENT_FILTER).is_ok());
        assert!(EnvFilter::try_new(PRODUCTION_FILTER).is_ok());
    }
}
