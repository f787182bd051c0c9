//! Temporal value model for sql-temporal.
//!
//! This crate provides the two sides of the conversion the adapter performs:
//!
//! - [`TemporalValue`] - rich calendar/time values (local, offset and zoned)
//! - [`PrimitiveValue`] - zone-less SQL driver forms ([`SqlTimestamp`],
//!   [`SqlDate`], [`SqlTime`])
//! - [`TemporalKind`] - the type tag used to request a rich value
//! - [`OffsetTime`] - a wall-clock time at a fixed UTC offset
//!
//! # Architecture
//!
//! ```text
//! temporal-types (this crate)
//!    │
//!    └─── sql-temporal   (normalizes TemporalValue → PrimitiveValue and
//!                         reads cursor primitives back into TemporalValue)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use temporal_types::{PrimitiveValue, SqlDate, TemporalKind, TemporalValue};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let value = TemporalValue::from(date);
//! assert_eq!(value.kind(), TemporalKind::LocalDate);
//!
//! let primitive = PrimitiveValue::from(SqlDate::new(date));
//! assert_eq!(primitive.to_string(), "2024-06-01");
//! ```

pub mod error;
pub mod primitive;
pub mod types;
pub mod values;

pub use chrono_tz::Tz;
pub use error::{Result, TemporalTypesError};
pub use primitive::{PrimitiveValue, SqlDate, SqlTime, SqlTimestamp};
pub use types::TemporalKind;
pub use values::{OffsetTime, TemporalValue};
