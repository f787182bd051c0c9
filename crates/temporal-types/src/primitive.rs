//! SQL driver primitives: timestamp, date and time.
//!
//! These are the zone-less forms a database driver binds and returns. None of
//! them carries an offset, which is why a round trip through a primitive
//! only preserves wall-clock components.

use crate::values::truncate_to_seconds;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A driver TIMESTAMP value: date and wall-clock time with nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SqlTimestamp(NaiveDateTime);

impl SqlTimestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// The wall-clock date-time of this timestamp.
    pub fn to_local_date_time(self) -> NaiveDateTime {
        self.0
    }

    /// The date part, as a driver would coerce a TIMESTAMP read as DATE.
    pub fn date(self) -> SqlDate {
        SqlDate(self.0.date())
    }

    /// The time part, as a driver would coerce a TIMESTAMP read as TIME.
    pub fn time(self) -> SqlTime {
        SqlTime::new(self.0.time())
    }
}

impl From<NaiveDateTime> for SqlTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for SqlTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))?;
        write_fraction(f, self.0.nanosecond())
    }
}

/// A driver DATE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SqlDate(NaiveDate);

impl SqlDate {
    pub fn new(value: NaiveDate) -> Self {
        Self(value)
    }

    /// The calendar date of this value.
    pub fn to_local_date(self) -> NaiveDate {
        self.0
    }

    /// Midnight of this date, as a driver would coerce a DATE read as TIMESTAMP.
    pub fn at_midnight(self) -> SqlTimestamp {
        SqlTimestamp(self.0.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDate> for SqlDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for SqlDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A driver TIME value.
///
/// Holds whole seconds only: the sub-second part of the source time is
/// dropped on construction, as a driver TIME column does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SqlTime(NaiveTime);

impl SqlTime {
    pub fn new(value: NaiveTime) -> Self {
        Self(truncate_to_seconds(value))
    }

    /// The wall-clock time of this value.
    pub fn to_local_time(self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for SqlTime {
    fn from(value: NaiveTime) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SqlTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// One of the primitive temporal forms a driver natively accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PrimitiveValue {
    Timestamp(SqlTimestamp),
    Date(SqlDate),
    Time(SqlTime),
}

impl PrimitiveValue {
    /// Try to get this value as a timestamp.
    pub fn as_timestamp(&self) -> Option<SqlTimestamp> {
        match self {
            PrimitiveValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Try to get this value as a date.
    pub fn as_date(&self) -> Option<SqlDate> {
        match self {
            PrimitiveValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as a time.
    pub fn as_time(&self) -> Option<SqlTime> {
        match self {
            PrimitiveValue::Time(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Timestamp(ts) => write!(f, "{ts}"),
            PrimitiveValue::Date(d) => write!(f, "{d}"),
            PrimitiveValue::Time(t) => write!(f, "{t}"),
        }
    }
}

impl From<SqlTimestamp> for PrimitiveValue {
    fn from(value: SqlTimestamp) -> Self {
        PrimitiveValue::Timestamp(value)
    }
}

impl From<SqlDate> for PrimitiveValue {
    fn from(value: SqlDate) -> Self {
        PrimitiveValue::Date(value)
    }
}

impl From<SqlTime> for PrimitiveValue {
    fn from(value: SqlTime) -> Self {
        PrimitiveValue::Time(value)
    }
}

/// Append `.fffffffff` with trailing zeros trimmed, or nothing for zero.
fn write_fraction(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    if nanos == 0 {
        return Ok(());
    }
    let digits = format!("{nanos:09}");
    write!(f, ".{}", digits.trim_end_matches('0'))
}
