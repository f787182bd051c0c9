//! sql-temporal Library
//!
//! Converts between a SQL driver's zone-less temporal primitives (TIMESTAMP,
//! DATE, TIME) and zone-aware date/time values.
//!
//! # Features
//!
//! - Outbound normalization: downgrade local, offset and zoned values to the
//!   primitive a driver binds, re-expressed in a target zone
//! - Inbound reading: read a cursor column as a requested temporal kind,
//!   attaching the target zone; other kinds go to an injected fallback
//! - Explicit NULL handling: a NULL column reads as `None`, never as an error
//! - Configurable offset resolution: resolve zone offsets at the value's own
//!   instant, or at "now" for compatibility with older data
//!
//! # Crates
//!
//! - `temporal_types` - the value model ([`TemporalValue`], [`PrimitiveValue`],
//!   [`TemporalKind`], [`OffsetTime`])
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone};
//! use sql_temporal::testing::{Cell, MemoryRow};
//! use sql_temporal::{
//!     BindValue, Extracted, Outbound, Requested, ScalarFallback, TemporalAdapter, TemporalKind,
//!     TemporalValue, Tz,
//! };
//!
//! let adapter = TemporalAdapter::new();
//! let local = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let tokyo = Tz::Asia__Tokyo.from_local_datetime(&local).unwrap();
//!
//! // Outbound: Tokyo 10:00 bound for a UTC database is 01:00.
//! let bound = adapter.normalize::<()>(Outbound::Temporal(tokyo.into()), &Tz::UTC);
//! let primitive = *bound.as_primitive().unwrap();
//! assert_eq!(primitive.to_string(), "2024-06-01 01:00:00");
//!
//! // Inbound: read it back as a zoned value in UTC.
//! let mut row = MemoryRow::new(vec![Cell::from(primitive)]);
//! let request = Requested::Temporal(TemporalKind::ZonedDateTime);
//! let read = adapter
//!     .read(&mut row, 0, request, &Tz::UTC, &ScalarFallback)
//!     .unwrap();
//! let value = read.into_temporal().flatten().unwrap();
//! assert_eq!(value.to_string(), "2024-06-01T01:00:00Z[UTC]");
//! ```

pub mod adapter;
pub mod clock;
pub mod config;
pub mod cursor;
pub mod error;
pub mod fallback;
pub mod forward;
pub mod reverse;
pub mod testing;
pub mod types;

pub use adapter::TemporalAdapter;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{OffsetResolution, TemporalConfig};
pub use cursor::Cursor;
pub use error::ConfigError;
pub use fallback::{FallbackResolver, ScalarFallback, ScalarKind, ScalarValue};
pub use forward::normalize_outbound;
pub use reverse::read_inbound;
pub use types::{BindValue, Extracted, Outbound, Requested};

pub use temporal_types::{
    OffsetTime, PrimitiveValue, SqlDate, SqlTime, SqlTimestamp, TemporalKind, TemporalValue, Tz,
};
