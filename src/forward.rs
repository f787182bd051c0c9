//! Forward conversion: TemporalValue → PrimitiveValue
//!
//! Downgrades rich temporal values to the zone-less primitives a driver
//! binds. Local values are copied as-is. Offset and zoned values are first
//! re-expressed in the target zone so the primitive carries that zone's
//! wall-clock reading.

use crate::adapter::TemporalAdapter;
use crate::clock::Clock;
use crate::config::OffsetResolution;
use crate::types::{BindValue, Outbound};
use chrono_tz::Tz;
use temporal_types::{PrimitiveValue, SqlDate, SqlTime, SqlTimestamp, TemporalValue};
use tracing::trace;

impl<K: Clock> TemporalAdapter<K> {
    /// Normalize one outbound parameter.
    ///
    /// Non-temporal parameters come back unchanged as [`BindValue::Other`].
    pub fn normalize<T>(&self, value: Outbound<T>, zone: &Tz) -> BindValue<T> {
        match value {
            Outbound::Temporal(temporal) => {
                BindValue::Primitive(self.normalize_temporal(temporal, zone))
            }
            Outbound::Other(other) => BindValue::Other(other),
        }
    }

    /// Normalize a batch of outbound parameters, keeping their order.
    pub fn normalize_all<T, I>(&self, values: I, zone: &Tz) -> Vec<BindValue<T>>
    where
        I: IntoIterator<Item = Outbound<T>>,
    {
        values
            .into_iter()
            .map(|value| self.normalize(value, zone))
            .collect()
    }

    /// Downgrade a rich temporal value to the primitive a driver accepts.
    pub fn normalize_temporal(&self, value: TemporalValue, zone: &Tz) -> PrimitiveValue {
        trace!(kind = %value.kind(), zone = %zone, "normalizing outbound temporal value");

        match value {
            TemporalValue::LocalDateTime(dt) => SqlTimestamp::new(dt).into(),
            TemporalValue::LocalDate(d) => SqlDate::new(d).into(),
            TemporalValue::LocalTime(t) => SqlTime::new(t).into(),

            TemporalValue::OffsetDateTime(dt) => {
                let local = match self.resolution() {
                    OffsetResolution::ValueInstant => dt.with_timezone(zone).naive_local(),
                    OffsetResolution::CurrentInstant => {
                        dt.with_timezone(&self.current_offset(zone)).naive_local()
                    }
                };
                SqlTimestamp::new(local).into()
            }

            TemporalValue::OffsetTime(t) => {
                let offset = self.outbound_time_offset(&t, zone);
                let shifted = t.with_offset_same_instant(offset);
                SqlTime::new(shifted.time()).into()
            }

            TemporalValue::ZonedDateTime(dt) => {
                let local = dt.with_timezone(zone).naive_local();
                SqlTimestamp::new(local).into()
            }
        }
    }
}

/// Normalize one outbound parameter on the system clock with the default
/// offset resolution.
pub fn normalize_outbound<T>(value: Outbound<T>, zone: &Tz) -> BindValue<T> {
    TemporalAdapter::new().normalize(value, zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
    use temporal_types::OffsetTime;

    fn local(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    fn winter() -> TemporalAdapter<FixedClock> {
        TemporalAdapter::with_clock(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        ))
    }

    fn attach_tokyo(local: NaiveDateTime) -> DateTime<Tz> {
        Tz::Asia__Tokyo.from_local_datetime(&local).unwrap()
    }

    fn timestamp(p: PrimitiveValue) -> NaiveDateTime {
        p.as_timestamp().unwrap().to_local_date_time()
    }

    #[test]
    fn test_local_values_are_copied() {
        let adapter = winter();
        let zone = Tz::Asia__Tokyo;

        let p = adapter.normalize_temporal(TemporalValue::LocalDateTime(local(10, 0, 0)), &zone);
        assert_eq!(timestamp(p), local(10, 0, 0));

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let p = adapter.normalize_temporal(TemporalValue::LocalDate(date), &zone);
        assert_eq!(p.as_date().unwrap().to_local_date(), date);

        let time = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        let p = adapter.normalize_temporal(TemporalValue::LocalTime(time), &zone);
        assert_eq!(p.as_time().unwrap().to_local_time(), time);
    }

    #[test]
    fn test_offset_date_time_same_offset_is_unchanged() {
        let dt = offset(9).from_local_datetime(&local(10, 0, 0)).unwrap();
        let p = winter().normalize_temporal(dt.into(), &Tz::Asia__Tokyo);
        assert_eq!(timestamp(p), local(10, 0, 0));
    }

    #[test]
    fn test_offset_date_time_shifts_by_offset_difference() {
        // Etc/GMT-1 is a fixed +01:00 zone.
        let zone: Tz = "Etc/GMT-1".parse().unwrap();
        let dt = offset(0).from_local_datetime(&local(10, 0, 0)).unwrap();
        for adapter in [
            winter(),
            winter().with_resolution(OffsetResolution::CurrentInstant),
        ] {
            let p = adapter.normalize_temporal(dt.into(), &zone);
            assert_eq!(timestamp(p), local(11, 0, 0));
        }
    }

    #[test]
    fn test_offset_date_time_resolution_modes_across_dst() {
        // Summer value, winter clock: Berlin is +02:00 at the value, +01:00 now.
        let dt = offset(0).from_local_datetime(&local(10, 0, 0)).unwrap();

        let p = winter().normalize_temporal(dt.into(), &Tz::Europe__Berlin);
        assert_eq!(timestamp(p), local(12, 0, 0));

        let legacy = winter().with_resolution(OffsetResolution::CurrentInstant);
        let p = legacy.normalize_temporal(dt.into(), &Tz::Europe__Berlin);
        assert_eq!(timestamp(p), local(11, 0, 0));
    }

    #[test]
    fn test_offset_time_converted_to_zone_offset() {
        let t = OffsetTime::new(NaiveTime::from_hms_opt(10, 0, 0).unwrap(), offset(9));
        let p = winter().normalize_temporal(t.into(), &Tz::UTC);
        assert_eq!(
            p.as_time().unwrap().to_local_time(),
            NaiveTime::from_hms_opt(1, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_offset_time_wraps_midnight() {
        let t = OffsetTime::new(NaiveTime::from_hms_opt(2, 0, 0).unwrap(), offset(9));
        let p = winter().normalize_temporal(t.into(), &Tz::America__New_York);
        assert_eq!(
            p.as_time().unwrap().to_local_time(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_offset_time_resolution_modes_across_dst() {
        // 2024-03-31 00:30 UTC is 01:30 CET; Berlin switches to CEST at 02:00.
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 0, 30, 0).unwrap();
        let adapter = TemporalAdapter::with_clock(FixedClock::new(now));
        let t = OffsetTime::new(NaiveTime::from_hms_opt(20, 0, 0).unwrap(), offset(0));

        let p = adapter.normalize_temporal(t.into(), &Tz::Europe__Berlin);
        let expected = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        assert_eq!(p.as_time().unwrap().to_local_time(), expected);

        let legacy = adapter.with_resolution(OffsetResolution::CurrentInstant);
        let p = legacy.normalize_temporal(t.into(), &Tz::Europe__Berlin);
        let expected = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
        assert_eq!(p.as_time().unwrap().to_local_time(), expected);
    }

    #[test]
    fn test_zoned_date_time_tokyo_to_utc() {
        let zoned = attach_tokyo(local(10, 0, 0));
        let p = winter().normalize_temporal(zoned.into(), &Tz::UTC);
        assert_eq!(p.to_string(), "2024-06-01 01:00:00");
    }

    #[test]
    fn test_other_values_pass_through() {
        let bound = winter().normalize(Outbound::Other(42_i64), &Tz::UTC);
        assert_eq!(bound, BindValue::Other(42));
    }

    #[test]
    fn test_normalize_all_keeps_order() {
        let values = vec![
            Outbound::Other("first"),
            Outbound::Temporal(TemporalValue::LocalDateTime(local(8, 0, 0))),
            Outbound::Other("last"),
        ];
        let bound = winter().normalize_all(values, &Tz::UTC);
        assert_eq!(bound.len(), 3);
        assert_eq!(bound[0], BindValue::Other("first"));
        assert_eq!(
            bound[1],
            BindValue::Primitive(SqlTimestamp::new(local(8, 0, 0)).into())
        );
        assert_eq!(bound[2], BindValue::Other("last"));
    }

    #[test]
    fn test_free_function_uses_default_adapter() {
        let zoned = attach_tokyo(local(10, 0, 0));
        let bound = normalize_outbound::<()>(Outbound::Temporal(zoned.into()), &Tz::UTC);
        assert_eq!(
            bound.as_primitive().map(ToString::to_string).as_deref(),
            Some("2024-06-01 01:00:00")
        );
    }
}
