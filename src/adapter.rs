//! The temporal adapter and the zone arithmetic shared by both directions.
//!
//! Outbound normalization lives in [`forward`](crate::forward), inbound
//! reading in [`reverse`](crate::reverse); both are methods on
//! [`TemporalAdapter`].

use crate::clock::{Clock, SystemClock};
use crate::config::OffsetResolution;
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use temporal_types::OffsetTime;
use tracing::debug;

/// Converts between driver primitives and rich temporal values.
///
/// The adapter holds no per-call state: the target zone is passed on every
/// call and the zone's offset is recomputed each time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalAdapter<K = SystemClock> {
    resolution: OffsetResolution,
    clock: K,
}

impl TemporalAdapter<SystemClock> {
    /// An adapter on the system clock with the default offset resolution.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Clock> TemporalAdapter<K> {
    /// An adapter reading "now" from `clock`.
    pub fn with_clock(clock: K) -> Self {
        Self {
            resolution: OffsetResolution::default(),
            clock,
        }
    }

    /// Set the offset resolution mode.
    pub fn with_resolution(mut self, resolution: OffsetResolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn resolution(&self) -> OffsetResolution {
        self.resolution
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// The zone's offset at the clock's present instant.
    pub(crate) fn current_offset(&self, zone: &Tz) -> FixedOffset {
        let now = self.clock.now().naive_utc();
        zone.offset_from_utc_datetime(&now).fix()
    }

    /// The zone offset an outbound offset time is re-expressed at.
    pub(crate) fn outbound_time_offset(&self, value: &OffsetTime, zone: &Tz) -> FixedOffset {
        match self.resolution {
            OffsetResolution::CurrentInstant => self.current_offset(zone),
            OffsetResolution::ValueInstant => {
                let anchor = self
                    .clock
                    .now()
                    .with_timezone(&value.offset())
                    .date_naive()
                    .and_time(value.time());
                let shift = TimeDelta::seconds(i64::from(value.offset().local_minus_utc()));
                let instant = anchor - shift;
                zone.offset_from_utc_datetime(&instant).fix()
            }
        }
    }

    /// The zone offset attached to an inbound wall-clock time.
    pub(crate) fn inbound_time_offset(&self, time: NaiveTime, zone: &Tz) -> FixedOffset {
        match self.resolution {
            OffsetResolution::CurrentInstant => self.current_offset(zone),
            OffsetResolution::ValueInstant => {
                let anchor = self
                    .clock
                    .now()
                    .with_timezone(zone)
                    .date_naive()
                    .and_time(time);
                attach_zone(zone, anchor).offset().fix()
            }
        }
    }
}

/// Interpret a wall-clock value as local time in `zone`.
///
/// A value inside a daylight-saving gap is moved later by the length of the
/// gap. A value inside an overlap takes the earlier of the two offsets.
pub(crate) fn attach_zone(zone: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    if let Some(zoned) = zone.from_local_datetime(&local).earliest() {
        return zoned;
    }

    let before = zone
        .offset_from_utc_datetime(&(local - TimeDelta::days(1)))
        .fix();
    let instant = local - TimeDelta::seconds(i64::from(before.local_minus_utc()));
    let zoned = zone.from_utc_datetime(&instant);
    debug!(
        zone = %zone,
        local = %local,
        adjusted = %zoned.naive_local(),
        "wall-clock value falls in a daylight-saving gap"
    );
    zoned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{NaiveDate, Utc};

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn winter_clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_attach_zone_plain() {
        let zoned = attach_zone(&Tz::Asia__Tokyo, local(2024, 6, 1, 10, 0));
        assert_eq!(zoned.naive_local(), local(2024, 6, 1, 10, 0));
        assert_eq!(zoned.offset().fix().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_attach_zone_gap_moves_later() {
        // Europe/Berlin skips 02:00-03:00 on 2024-03-31.
        let zoned = attach_zone(&Tz::Europe__Berlin, local(2024, 3, 31, 2, 30));
        assert_eq!(zoned.naive_local(), local(2024, 3, 31, 3, 30));
        assert_eq!(zoned.offset().fix().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_attach_zone_overlap_takes_earlier_offset() {
        // Europe/Berlin repeats 02:00-03:00 on 2024-10-27.
        let zoned = attach_zone(&Tz::Europe__Berlin, local(2024, 10, 27, 2, 30));
        assert_eq!(zoned.naive_local(), local(2024, 10, 27, 2, 30));
        assert_eq!(zoned.offset().fix().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_current_offset_uses_clock() {
        let adapter = TemporalAdapter::with_clock(winter_clock());
        let offset = adapter.current_offset(&Tz::Europe__Berlin);
        assert_eq!(offset.local_minus_utc(), 3600);
    }

    #[test]
    fn test_inbound_time_offset_modes_agree_without_transition() {
        let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let value = TemporalAdapter::with_clock(winter_clock());
        let legacy = value.with_resolution(OffsetResolution::CurrentInstant);
        assert_eq!(
            value.inbound_time_offset(time, &Tz::Europe__Berlin),
            legacy.inbound_time_offset(time, &Tz::Europe__Berlin)
        );
    }

    #[test]
    fn test_time_offset_modes_differ_across_transition() {
        // 2024-03-31 00:30 UTC is 01:30 CET; Berlin switches to CEST at 02:00.
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 31, 0, 30, 0).unwrap());
        let evening = NaiveTime::from_hms_opt(20, 0, 0).unwrap();

        let value = TemporalAdapter::with_clock(clock);
        assert_eq!(
            value
                .inbound_time_offset(evening, &Tz::Europe__Berlin)
                .local_minus_utc(),
            2 * 3600
        );

        let legacy = value.with_resolution(OffsetResolution::CurrentInstant);
        assert_eq!(
            legacy
                .inbound_time_offset(evening, &Tz::Europe__Berlin)
                .local_minus_utc(),
            3600
        );
    }
}
