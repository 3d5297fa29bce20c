//! Shared configuration for the linefilter tools.
//!
//! `defaults/linefilter.default.toml` is embedded into every binary so the
//! documented defaults and the runtime behavior cannot drift apart. The tools
//! read no user configuration; [`load_defaults`] deserializes the embedded
//! file into [`LinefilterConfig`].

use config::{Config, File, FileFormat};
use serde::Deserialize;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/linefilter.default.toml");

/// Top-level configuration consumed by linefilter applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LinefilterConfig {
    pub logging: LoggingConfig,
}

/// Diagnostics output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. `warn` or `linefilter=debug`
    pub filter: String,
    pub ansi: bool,
}

/// Deserialize the embedded defaults.
pub fn load_defaults() -> Result<LinefilterConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml))
        .build()?
        .try_deserialize()
}
