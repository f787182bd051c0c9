//! Reverse conversion: cursor primitives → TemporalValue
//!
//! Reads the primitive matching the requested kind from a cursor column and
//! upgrades it. Zone-aware kinds are produced by attaching the target zone
//! to the stored wall-clock value, never by converting it.
//!
//! ## Null Handling
//!
//! A NULL column yields `Ok(None)` for every temporal kind.
//!
//! ## Error Handling
//!
//! The cursor's read error is the only failure and is returned unchanged.

use crate::adapter::{attach_zone, TemporalAdapter};
use crate::clock::Clock;
use crate::cursor::Cursor;
use crate::fallback::FallbackResolver;
use crate::types::{Extracted, Requested};
use chrono_tz::Tz;
use temporal_types::{OffsetTime, TemporalKind, TemporalValue};
use tracing::{debug, trace};

impl<K: Clock> TemporalAdapter<K> {
    /// Read column `index` as the requested type.
    ///
    /// Temporal requests are handled here; everything else is delegated to
    /// `fallback` and its output returned unmodified.
    pub fn read<C, F>(
        &self,
        cursor: &mut C,
        index: usize,
        requested: Requested<F::Request>,
        zone: &Tz,
        fallback: &F,
    ) -> Result<Extracted<F::Output>, C::Error>
    where
        C: Cursor + ?Sized,
        F: FallbackResolver<C> + ?Sized,
    {
        match requested {
            Requested::Temporal(kind) => self
                .read_temporal(cursor, index, kind, zone)
                .map(Extracted::Temporal),
            Requested::Other(request) => {
                debug!(index, "delegating column read to fallback resolver");
                fallback
                    .resolve(cursor, index, request)
                    .map(Extracted::Other)
            }
        }
    }

    /// Read column `index` as a rich temporal value of `kind`.
    pub fn read_temporal<C>(
        &self,
        cursor: &mut C,
        index: usize,
        kind: TemporalKind,
        zone: &Tz,
    ) -> Result<Option<TemporalValue>, C::Error>
    where
        C: Cursor + ?Sized,
    {
        trace!(index, kind = %kind, zone = %zone, "reading inbound temporal value");

        let value = match kind {
            TemporalKind::LocalDateTime => cursor
                .get_timestamp(index)?
                .map(|ts| TemporalValue::LocalDateTime(ts.to_local_date_time())),

            TemporalKind::LocalDate => cursor
                .get_date(index)?
                .map(|d| TemporalValue::LocalDate(d.to_local_date())),

            TemporalKind::LocalTime => cursor
                .get_time(index)?
                .map(|t| TemporalValue::LocalTime(t.to_local_time())),

            TemporalKind::ZonedDateTime => cursor.get_timestamp(index)?.map(|ts| {
                TemporalValue::ZonedDateTime(attach_zone(zone, ts.to_local_date_time()))
            }),

            TemporalKind::OffsetDateTime => cursor.get_timestamp(index)?.map(|ts| {
                TemporalValue::OffsetDateTime(
                    attach_zone(zone, ts.to_local_date_time()).fixed_offset(),
                )
            }),

            TemporalKind::OffsetTime => cursor.get_time(index)?.map(|t| {
                let time = t.to_local_time();
                let offset = self.inbound_time_offset(time, zone);
                TemporalValue::OffsetTime(OffsetTime::new(time, offset))
            }),
        };

        Ok(value)
    }
}

/// Read column `index` on the system clock with the default offset
/// resolution.
pub fn read_inbound<C, F>(
    cursor: &mut C,
    index: usize,
    requested: Requested<F::Request>,
    zone: &Tz,
    fallback: &F,
) -> Result<Extracted<F::Output>, C::Error>
where
    C: Cursor + ?Sized,
    F: FallbackResolver<C> + ?Sized,
{
    TemporalAdapter::new().read(cursor, index, requested, zone, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::OffsetResolution;
    use crate::fallback::{ScalarFallback, ScalarKind, ScalarValue};
    use crate::testing::{Cell, CellError, MemoryRow};
    use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

    fn local(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn winter() -> TemporalAdapter<FixedClock> {
        TemporalAdapter::with_clock(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn test_read_local_kinds() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let mut row = MemoryRow::new(vec![
            Cell::Timestamp(local(1, 0, 0)),
            Cell::Date(date),
            Cell::Time(time),
        ]);
        let adapter = winter();

        let v = adapter
            .read_temporal(&mut row, 0, TemporalKind::LocalDateTime, &Tz::UTC)
            .unwrap();
        assert_eq!(v, Some(TemporalValue::LocalDateTime(local(1, 0, 0))));

        let v = adapter
            .read_temporal(&mut row, 1, TemporalKind::LocalDate, &Tz::UTC)
            .unwrap();
        assert_eq!(v, Some(TemporalValue::LocalDate(date)));

        let v = adapter
            .read_temporal(&mut row, 2, TemporalKind::LocalTime, &Tz::UTC)
            .unwrap();
        assert_eq!(v, Some(TemporalValue::LocalTime(time)));
    }

    #[test]
    fn test_read_zoned_attaches_zone() {
        let mut row = MemoryRow::new(vec![Cell::Timestamp(local(1, 0, 0))]);
        let v = winter()
            .read_temporal(&mut row, 0, TemporalKind::ZonedDateTime, &Tz::UTC)
            .unwrap()
            .unwrap();
        assert_eq!(v.to_string(), "2024-06-01T01:00:00Z[UTC]");
        let zoned = v.as_zoned_date_time().unwrap();
        assert_eq!(zoned.naive_local(), local(1, 0, 0));
        assert_eq!(zoned.timezone(), Tz::UTC);
    }

    #[test]
    fn test_read_offset_date_time_uses_offset_at_value() {
        let mut row = MemoryRow::new(vec![Cell::Timestamp(local(10, 0, 0))]);
        let zone = Tz::Europe__Berlin;
        let v = winter()
            .with_resolution(OffsetResolution::CurrentInstant)
            .read_temporal(&mut row, 0, TemporalKind::OffsetDateTime, &zone)
            .unwrap()
            .unwrap()
            .as_offset_date_time()
            .unwrap();
        assert_eq!(v.naive_local(), local(10, 0, 0));
        assert_eq!(v.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_read_offset_time() {
        let time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let mut row = MemoryRow::new(vec![Cell::Time(time)]);
        let v = winter()
            .read_temporal(&mut row, 0, TemporalKind::OffsetTime, &Tz::Asia__Tokyo)
            .unwrap()
            .unwrap();
        assert_eq!(
            v,
            TemporalValue::OffsetTime(OffsetTime::new(
                time,
                FixedOffset::east_opt(9 * 3600).unwrap()
            ))
        );
    }

    #[test]
    fn test_read_offset_time_legacy_uses_current_offset() {
        let time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let mut row = MemoryRow::new(vec![Cell::Time(time)]);
        let zone = Tz::America__New_York;
        let v = winter()
            .with_resolution(OffsetResolution::CurrentInstant)
            .read_temporal(&mut row, 0, TemporalKind::OffsetTime, &zone)
            .unwrap()
            .unwrap()
            .as_offset_time()
            .unwrap();
        assert_eq!(v.time(), time);
        assert_eq!(v.offset(), FixedOffset::west_opt(5 * 3600).unwrap());
    }

    #[test]
    fn test_null_yields_none_for_every_kind() {
        let adapter = winter();
        for kind in TemporalKind::ALL {
            let mut row = MemoryRow::new(vec![Cell::Null]);
            let v = adapter
                .read_temporal(&mut row, 0, kind, &Tz::Asia__Tokyo)
                .unwrap();
            assert_eq!(v, None, "kind {kind}");
        }
    }

    #[test]
    fn test_cursor_error_propagates() {
        let mut row = MemoryRow::new(vec![Cell::Text("nope".to_string())]);
        let err = winter()
            .read_temporal(&mut row, 3, TemporalKind::LocalDate, &Tz::UTC)
            .unwrap_err();
        assert_eq!(err, CellError::IndexOutOfRange { index: 3, len: 1 });

        let err = winter()
            .read_temporal(&mut row, 0, TemporalKind::LocalDate, &Tz::UTC)
            .unwrap_err();
        assert!(matches!(err, CellError::TypeMismatch { .. }));
    }

    #[test]
    fn test_each_read_touches_cursor_once() {
        let mut row = MemoryRow::new(vec![Cell::Timestamp(local(1, 0, 0))]);
        let adapter = winter();
        for (n, kind) in [
            TemporalKind::LocalDateTime,
            TemporalKind::ZonedDateTime,
            TemporalKind::OffsetDateTime,
        ]
        .into_iter()
        .enumerate()
        {
            adapter.read_temporal(&mut row, 0, kind, &Tz::UTC).unwrap();
            assert_eq!(row.reads(), n + 1);
        }
    }

    #[test]
    fn test_other_requests_go_to_fallback() {
        let mut row = MemoryRow::new(vec![Cell::Int(42)]);
        let v = winter()
            .read(
                &mut row,
                0,
                Requested::Other(ScalarKind::Int),
                &Tz::UTC,
                &ScalarFallback,
            )
            .unwrap();
        assert_eq!(v, Extracted::Other(Some(ScalarValue::Int(42))));
    }

    #[test]
    fn test_free_function_reads_temporal() {
        let mut row = MemoryRow::new(vec![Cell::Timestamp(local(1, 0, 0))]);
        let v = read_inbound(
            &mut row,
            0,
            Requested::Temporal(TemporalKind::LocalDateTime),
            &Tz::UTC,
            &ScalarFallback,
        )
        .unwrap();
        assert_eq!(
            v.into_temporal(),
            Some(Some(TemporalValue::LocalDateTime(local(1, 0, 0))))
        );
    }
}
