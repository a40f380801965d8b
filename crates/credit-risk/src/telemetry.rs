use crate::config::TelemetryConfig;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter {value:?}: unable to build EnvFilter")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("telemetry init failed: {0}")]
    Init(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over the configured
/// level when both are set.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
                value: config.log_level.clone(),
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Init)
}
