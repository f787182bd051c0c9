//! Error types for adapter configuration.
//!
//! Conversions themselves have a single failure mode, the cursor's own read
//! error, which is propagated unchanged and so has no type here.

use thiserror::Error;

/// Errors that can occur while loading or applying a [`TemporalConfig`](crate::TemporalConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid IANA timezone string.
    #[error("Invalid timezone: {0}. Use IANA timezone names like 'America/New_York', 'UTC', 'Europe/London'")]
    InvalidTimezone(String),

    /// Malformed TOML configuration.
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed YAML configuration.
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;
