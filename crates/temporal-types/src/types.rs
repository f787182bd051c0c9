//! Type tags for rich temporal values.

use crate::error::{Result, TemporalTypesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a rich temporal value.
///
/// Used as the requested type when reading a column, and reported by
/// [`TemporalValue::kind`](crate::TemporalValue::kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemporalKind {
    /// Date and wall-clock time without zone or offset.
    LocalDateTime,

    /// Calendar date without zone or offset.
    LocalDate,

    /// Wall-clock time without zone or offset.
    LocalTime,

    /// Date and time with a fixed UTC offset.
    OffsetDateTime,

    /// Time with a fixed UTC offset.
    OffsetTime,

    /// Date and time in a named time zone.
    ZonedDateTime,
}

impl TemporalKind {
    /// All kinds, in declaration order.
    pub const ALL: [TemporalKind; 6] = [
        TemporalKind::LocalDateTime,
        TemporalKind::LocalDate,
        TemporalKind::LocalTime,
        TemporalKind::OffsetDateTime,
        TemporalKind::OffsetTime,
        TemporalKind::ZonedDateTime,
    ];

    /// The kebab-case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalKind::LocalDateTime => "local-date-time",
            TemporalKind::LocalDate => "local-date",
            TemporalKind::LocalTime => "local-time",
            TemporalKind::OffsetDateTime => "offset-date-time",
            TemporalKind::OffsetTime => "offset-time",
            TemporalKind::ZonedDateTime => "zoned-date-time",
        }
    }

    /// Whether values of this kind carry zone or offset information.
    pub fn is_zone_aware(&self) -> bool {
        matches!(
            self,
            TemporalKind::OffsetDateTime | TemporalKind::OffsetTime | TemporalKind::ZonedDateTime
        )
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemporalKind {
    type Err = TemporalTypesError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        TemporalKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| TemporalTypesError::UnknownKind(s.to_string()))
    }
}
