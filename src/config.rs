//! Adapter configuration.
//!
//! ```toml
//! timezone = "Asia/Tokyo"
//! offset-resolution = "current-instant"
//! ```

use crate::adapter::TemporalAdapter;
use crate::clock::{Clock, SystemClock};
use crate::error::{ConfigError, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which instant a zone's UTC offset is resolved at when a fixed offset has
/// to be derived from zone rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetResolution {
    /// Resolve at the instant the value itself denotes. Offset times have no
    /// date and are anchored on the clock's current date.
    #[default]
    ValueInstant,

    /// Resolve at the clock's present instant, whatever the value. Values on
    /// the other side of a daylight-saving transition from "now" get the
    /// wrong offset; kept for compatibility with data written that way.
    CurrentInstant,
}

/// Configuration for a [`TemporalAdapter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TemporalConfig {
    /// Target time zone. Must be an IANA timezone name like
    /// "America/New_York", "UTC", "Europe/London".
    pub timezone: String,

    /// Offset resolution mode.
    pub offset_resolution: OffsetResolution,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            offset_resolution: OffsetResolution::default(),
        }
    }
}

impl TemporalConfig {
    /// Create a new configuration with the specified timezone.
    pub fn with_timezone(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            ..Default::default()
        }
    }

    /// Set the offset resolution mode.
    pub fn with_offset_resolution(mut self, resolution: OffsetResolution) -> Self {
        self.offset_resolution = resolution;
        self
    }

    /// Load a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from YAML.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parse the configured timezone into a chrono-tz Tz.
    pub fn parse_timezone(&self) -> Result<Tz> {
        Tz::from_str(self.timezone.trim())
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }

    /// Build an adapter on the system clock, together with the target zone.
    pub fn build_adapter(&self) -> Result<(TemporalAdapter<SystemClock>, Tz)> {
        self.build_adapter_with_clock(SystemClock)
    }

    /// Build an adapter on the given clock, together with the target zone.
    pub fn build_adapter_with_clock<K: Clock>(&self, clock: K) -> Result<(TemporalAdapter<K>, Tz)> {
        let zone = self.parse_timezone()?;
        tracing::debug!(
            zone = %zone,
            resolution = ?self.offset_resolution,
            "configured temporal adapter"
        );
        let adapter = TemporalAdapter::with_clock(clock).with_resolution(self.offset_resolution);
        Ok((adapter, zone))
    }
}
