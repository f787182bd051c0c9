//! The generic fallback contract.
//!
//! The adapter only understands temporal requests. Every other requested
//! type goes to a [`FallbackResolver`] supplied by the caller, whose result
//! is returned without modification. Because the fallback reads the same
//! cursor, it reports failures with the cursor's error type.

use crate::cursor::Cursor;
use serde::{Deserialize, Serialize};

/// Column extraction for requested types the adapter does not special-case.
pub trait FallbackResolver<C: Cursor + ?Sized> {
    /// The fallback's own type tag.
    type Request;
    /// What the fallback produces.
    type Output;

    fn resolve(
        &self,
        cursor: &mut C,
        index: usize,
        request: Self::Request,
    ) -> Result<Self::Output, C::Error>;
}

impl<C, F> FallbackResolver<C> for &F
where
    C: Cursor + ?Sized,
    F: FallbackResolver<C> + ?Sized,
{
    type Request = F::Request;
    type Output = F::Output;

    fn resolve(
        &self,
        cursor: &mut C,
        index: usize,
        request: Self::Request,
    ) -> Result<Self::Output, C::Error> {
        (**self).resolve(cursor, index, request)
    }
}

/// Plain scalar column types a general-purpose extractor handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    Text,
    Bytes,
}

/// A scalar column value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

/// Fallback that reads plain scalar columns, `None` for SQL NULL.
///
/// Implemented for [`MemoryRow`](crate::testing::MemoryRow) and, with the
/// `postgres` feature, for `tokio_postgres::Row`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarFallback;

#[cfg(feature = "postgres")]
mod postgres {
    use super::{FallbackResolver, ScalarFallback, ScalarKind, ScalarValue};
    use tokio_postgres::types::{FromSql, Type};
    use tokio_postgres::Row;

    fn read<T>(row: &Row, index: usize) -> Result<Option<T>, tokio_postgres::Error>
    where
        T: for<'a> FromSql<'a>,
    {
        row.try_get::<_, Option<T>>(index)
    }

    impl FallbackResolver<Row> for ScalarFallback {
        type Request = ScalarKind;
        type Output = Option<ScalarValue>;

        fn resolve(
            &self,
            row: &mut Row,
            index: usize,
            request: ScalarKind,
        ) -> Result<Option<ScalarValue>, tokio_postgres::Error> {
            let pg_type = row.columns().get(index).map(|c| c.type_().clone());

            let value = match request {
                ScalarKind::Bool => read::<bool>(row, index)?.map(ScalarValue::Bool),
                ScalarKind::Int => {
                    let value = match pg_type {
                        Some(Type::INT2) => read::<i16>(row, index)?.map(i64::from),
                        Some(Type::INT4) => read::<i32>(row, index)?.map(i64::from),
                        _ => read::<i64>(row, index)?,
                    };
                    value.map(ScalarValue::Int)
                }
                ScalarKind::Float => {
                    let value = match pg_type {
                        Some(Type::FLOAT4) => read::<f32>(row, index)?.map(f64::from),
                        _ => read::<f64>(row, index)?,
                    };
                    value.map(ScalarValue::Float)
                }
                ScalarKind::Text => read::<String>(row, index)?.map(ScalarValue::Text),
                ScalarKind::Bytes => read::<Vec<u8>>(row, index)?.map(ScalarValue::Bytes),
            };
            Ok(value)
        }
    }
}
