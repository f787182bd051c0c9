//! Rich temporal values.
//!
//! [`TemporalValue`] is the closed set of calendar/time values the adapter
//! understands. Each variant wraps the chrono type that carries the same
//! information, except for offset times, which chrono does not model and
//! which are represented by [`OffsetTime`].

use crate::error::{Result, TemporalTypesError};
use crate::types::TemporalKind;
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, Timelike,
};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// A calendar/time value with optional zone or offset awareness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    /// Date and wall-clock time, no zone.
    LocalDateTime(NaiveDateTime),

    /// Calendar date, no zone.
    LocalDate(NaiveDate),

    /// Wall-clock time, no zone.
    LocalTime(NaiveTime),

    /// Date and time at a fixed UTC offset.
    OffsetDateTime(DateTime<FixedOffset>),

    /// Time at a fixed UTC offset.
    OffsetTime(OffsetTime),

    /// Date and time in a named IANA time zone.
    ZonedDateTime(DateTime<Tz>),
}

impl TemporalValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> TemporalKind {
        match self {
            TemporalValue::LocalDateTime(_) => TemporalKind::LocalDateTime,
            TemporalValue::LocalDate(_) => TemporalKind::LocalDate,
            TemporalValue::LocalTime(_) => TemporalKind::LocalTime,
            TemporalValue::OffsetDateTime(_) => TemporalKind::OffsetDateTime,
            TemporalValue::OffsetTime(_) => TemporalKind::OffsetTime,
            TemporalValue::ZonedDateTime(_) => TemporalKind::ZonedDateTime,
        }
    }

    /// Try to get this value as a local date-time.
    pub fn as_local_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            TemporalValue::LocalDateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Try to get this value as a local date.
    pub fn as_local_date(&self) -> Option<NaiveDate> {
        match self {
            TemporalValue::LocalDate(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a local time.
    pub fn as_local_time(&self) -> Option<NaiveTime> {
        match self {
            TemporalValue::LocalTime(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get this value as an offset date-time.
    pub fn as_offset_date_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            TemporalValue::OffsetDateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Try to get this value as an offset time.
    pub fn as_offset_time(&self) -> Option<OffsetTime> {
        match self {
            TemporalValue::OffsetTime(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get this value as a zoned date-time.
    pub fn as_zoned_date_time(&self) -> Option<DateTime<Tz>> {
        match self {
            TemporalValue::ZonedDateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalValue::LocalDateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            TemporalValue::LocalDate(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            TemporalValue::LocalTime(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            TemporalValue::OffsetDateTime(dt) => {
                f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            TemporalValue::OffsetTime(t) => write!(f, "{t}"),
            TemporalValue::ZonedDateTime(dt) => write!(
                f,
                "{}[{}]",
                dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
                dt.timezone()
            ),
        }
    }
}

impl From<NaiveDateTime> for TemporalValue {
    fn from(value: NaiveDateTime) -> Self {
        TemporalValue::LocalDateTime(value)
    }
}

impl From<NaiveDate> for TemporalValue {
    fn from(value: NaiveDate) -> Self {
        TemporalValue::LocalDate(value)
    }
}

impl From<NaiveTime> for TemporalValue {
    fn from(value: NaiveTime) -> Self {
        TemporalValue::LocalTime(value)
    }
}

impl From<DateTime<FixedOffset>> for TemporalValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        TemporalValue::OffsetDateTime(value)
    }
}

impl From<OffsetTime> for TemporalValue {
    fn from(value: OffsetTime) -> Self {
        TemporalValue::OffsetTime(value)
    }
}

impl From<DateTime<Tz>> for TemporalValue {
    fn from(value: DateTime<Tz>) -> Self {
        TemporalValue::ZonedDateTime(value)
    }
}

/// A wall-clock time paired with a fixed UTC offset.
///
/// Equality compares both the time and the offset, so `10:00+01:00` and
/// `09:00Z` are different values even though they name the same instant of
/// any given day. Use [`OffsetTime::with_offset_same_instant`] to compare
/// across offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}

impl OffsetTime {
    /// Create an offset time from its parts.
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// The wall-clock time.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// The UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Re-express this time at another offset, keeping the same instant.
    ///
    /// The wall-clock time wraps around midnight; the day change is dropped.
    pub fn with_offset_same_instant(&self, offset: FixedOffset) -> Self {
        let shift = i64::from(offset.local_minus_utc() - self.offset.local_minus_utc());
        let (time, _) = self.time.overflowing_add_signed(TimeDelta::seconds(shift));
        Self { time, offset }
    }

    /// Keep the wall-clock time and replace the offset.
    pub fn with_offset_same_local(&self, offset: FixedOffset) -> Self {
        Self {
            time: self.time,
            offset,
        }
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M:%S%.f"))?;
        if self.offset.local_minus_utc() == 0 {
            f.write_str("Z")
        } else {
            write!(f, "{}", self.offset)
        }
    }
}

impl FromStr for OffsetTime {
    type Err = TemporalTypesError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TemporalTypesError::InvalidOffsetTime {
            value: s.to_string(),
        };
        let s = s.trim();

        let (time_part, offset_seconds) =
            if let Some(time_part) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
                (time_part, 0)
            } else {
                let split = s.rfind(['+', '-']).ok_or_else(invalid)?;
                let (time_part, offset_part) = s.split_at(split);
                (time_part, parse_offset_seconds(offset_part).ok_or_else(invalid)?)
            };

        let time = NaiveTime::from_str(time_part).map_err(|_| invalid())?;
        let offset = FixedOffset::east_opt(offset_seconds).ok_or(
            TemporalTypesError::OffsetOutOfRange {
                seconds: offset_seconds,
            },
        )?;
        Ok(Self::new(time, offset))
    }
}

/// Parse `+HH:MM`, `+HH:MM:SS`, `+HHMM` or `+HH` into signed seconds.
fn parse_offset_seconds(s: &str) -> Option<i32> {
    if !s.is_ascii() {
        return None;
    }
    let (sign, digits) = if let Some(digits) = s.strip_prefix('+') {
        (1, digits)
    } else {
        (-1, s.strip_prefix('-')?)
    };

    let fields: Vec<&str> = if digits.contains(':') {
        digits.split(':').collect()
    } else {
        match digits.len() {
            2 => vec![digits],
            4 => vec![&digits[..2], &digits[2..]],
            _ => return None,
        }
    };
    if fields.is_empty() || fields.len() > 3 || fields.iter().any(|f| f.len() != 2) {
        return None;
    }

    let mut seconds = 0;
    for (field, scale) in fields.iter().zip([3600, 60, 1]) {
        let n: i32 = field.parse().ok()?;
        if scale != 3600 && n >= 60 {
            return None;
        }
        seconds += n * scale;
    }
    Some(sign * seconds)
}

/// Drop the sub-second part of a time.
pub(crate) fn truncate_to_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}
