//! The cursor contract consumed by the inbound reader.
//!
//! A [`Cursor`] is a forward-reading handle over one result row, indexed by
//! column position. Index numbering (0- or 1-based) is whatever the
//! underlying driver uses; the adapter passes it through untouched.

use temporal_types::{SqlDate, SqlTime, SqlTimestamp};

/// Read access to temporal primitives in the current row.
///
/// Each getter returns `Ok(None)` for SQL NULL and `Err` when the driver
/// fails to read the column. The error is handed back to the caller of the
/// adapter as-is.
pub trait Cursor {
    type Error;

    fn get_timestamp(&mut self, index: usize) -> Result<Option<SqlTimestamp>, Self::Error>;

    fn get_date(&mut self, index: usize) -> Result<Option<SqlDate>, Self::Error>;

    fn get_time(&mut self, index: usize) -> Result<Option<SqlTime>, Self::Error>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Error = C::Error;

    fn get_timestamp(&mut self, index: usize) -> Result<Option<SqlTimestamp>, Self::Error> {
        (**self).get_timestamp(index)
    }

    fn get_date(&mut self, index: usize) -> Result<Option<SqlDate>, Self::Error> {
        (**self).get_date(index)
    }

    fn get_time(&mut self, index: usize) -> Result<Option<SqlTime>, Self::Error> {
        (**self).get_time(index)
    }
}

/// `tokio-postgres` rows as cursors.
///
/// Columns are read with `try_get` the same way a full table scan reads
/// them: `TIMESTAMP` as `NaiveDateTime`, `DATE` as `NaiveDate` and `TIME`
/// as `NaiveTime`. A `TIMESTAMPTZ` column is rejected by the driver's type
/// check and surfaces as a read error.
#[cfg(feature = "postgres")]
mod postgres {
    use super::Cursor;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use temporal_types::{SqlDate, SqlTime, SqlTimestamp};
    use tokio_postgres::Row;

    impl Cursor for Row {
        type Error = tokio_postgres::Error;

        fn get_timestamp(&mut self, index: usize) -> Result<Option<SqlTimestamp>, Self::Error> {
            let value = self.try_get::<_, Option<NaiveDateTime>>(index)?;
            Ok(value.map(SqlTimestamp::from))
        }

        fn get_date(&mut self, index: usize) -> Result<Option<SqlDate>, Self::Error> {
            let value = self.try_get::<_, Option<NaiveDate>>(index)?;
            Ok(value.map(SqlDate::from))
        }

        fn get_time(&mut self, index: usize) -> Result<Option<SqlTime>, Self::Error> {
            let value = self.try_get::<_, Option<NaiveTime>>(index)?;
            Ok(value.map(SqlTime::from))
        }
    }
}
