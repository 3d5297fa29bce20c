//! Diagnostics setup
//!
//! Logs always go to stderr; stdout stays unused. `RUST_LOG` takes precedence
//! over the configured filter.

use linefilter_config::ConfigError;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
pub fn init() -> Result<(), ConfigError> {
    let config = linefilter_config::load_defaults()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(config.logging.ansi)
        .init();

    Ok(())
}
