//! Source of the present instant.
//!
//! Offset resolution for offset times, and for every offset value in
//! [`OffsetResolution::CurrentInstant`](crate::OffsetResolution::CurrentInstant)
//! mode, depends on "now". Reading it through [`Clock`] keeps those paths
//! deterministic under test.

use chrono::{DateTime, Utc};

/// Something that can tell the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<K: Clock + ?Sized> Clock for &K {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
