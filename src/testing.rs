//! In-memory cursor for tests
//!
//! [`MemoryRow`] holds one row of [`Cell`]s and implements [`Cursor`] with
//! the coercions a typical driver applies: a DATE read as a timestamp yields
//! midnight, and a TIMESTAMP read as a date or time yields that component.
//! It also counts reads, so callers can check that a conversion touched the
//! cursor exactly once.

use crate::cursor::Cursor;
use crate::fallback::{FallbackResolver, ScalarFallback, ScalarKind, ScalarValue};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use temporal_types::{PrimitiveValue, SqlDate, SqlTime, SqlTimestamp};
use thiserror::Error;

/// One column value in a [`MemoryRow`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Timestamp(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Cell {
    fn type_name(&self) -> &'static str {
        match self {
            Cell::Null => "NULL",
            Cell::Timestamp(_) => "TIMESTAMP",
            Cell::Date(_) => "DATE",
            Cell::Time(_) => "TIME",
            Cell::Bool(_) => "BOOLEAN",
            Cell::Int(_) => "BIGINT",
            Cell::Float(_) => "DOUBLE",
            Cell::Text(_) => "TEXT",
            Cell::Bytes(_) => "BLOB",
        }
    }
}

impl From<PrimitiveValue> for Cell {
    fn from(value: PrimitiveValue) -> Self {
        match value {
            PrimitiveValue::Timestamp(ts) => Cell::Timestamp(ts.to_local_date_time()),
            PrimitiveValue::Date(d) => Cell::Date(d.to_local_date()),
            PrimitiveValue::Time(t) => Cell::Time(t.to_local_time()),
        }
    }
}

/// Errors raised by [`MemoryRow`] reads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("Column index {index} out of range for row of {len} columns")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Type mismatch at column {index}: expected {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
}

/// A single result row held in memory, indexed from 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRow {
    cells: Vec<Cell>,
    reads: usize,
}

impl MemoryRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells, reads: 0 }
    }

    /// Number of column reads performed so far, failed reads included.
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn cell(&mut self, index: usize) -> Result<&Cell, CellError> {
        self.reads += 1;
        let len = self.cells.len();
        match self.cells.get(index) {
            Some(cell) => Ok(cell),
            None => Err(CellError::IndexOutOfRange { index, len }),
        }
    }
}

impl From<Vec<Cell>> for MemoryRow {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

impl FromIterator<Cell> for MemoryRow {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn mismatch(index: usize, expected: &'static str, cell: &Cell) -> CellError {
    CellError::TypeMismatch {
        index,
        expected,
        actual: cell.type_name(),
    }
}

impl Cursor for MemoryRow {
    type Error = CellError;

    fn get_timestamp(&mut self, index: usize) -> Result<Option<SqlTimestamp>, CellError> {
        match self.cell(index)? {
            Cell::Null => Ok(None),
            Cell::Timestamp(ts) => Ok(Some(SqlTimestamp::new(*ts))),
            Cell::Date(d) => Ok(Some(SqlDate::new(*d).at_midnight())),
            other => Err(mismatch(index, "TIMESTAMP", other)),
        }
    }

    fn get_date(&mut self, index: usize) -> Result<Option<SqlDate>, CellError> {
        match self.cell(index)? {
            Cell::Null => Ok(None),
            Cell::Date(d) => Ok(Some(SqlDate::new(*d))),
            Cell::Timestamp(ts) => Ok(Some(SqlTimestamp::new(*ts).date())),
            other => Err(mismatch(index, "DATE", other)),
        }
    }

    fn get_time(&mut self, index: usize) -> Result<Option<SqlTime>, CellError> {
        match self.cell(index)? {
            Cell::Null => Ok(None),
            Cell::Time(t) => Ok(Some(SqlTime::new(*t))),
            Cell::Timestamp(ts) => Ok(Some(SqlTimestamp::new(*ts).time())),
            other => Err(mismatch(index, "TIME", other)),
        }
    }
}

impl FallbackResolver<MemoryRow> for ScalarFallback {
    type Request = ScalarKind;
    type Output = Option<ScalarValue>;

    fn resolve(
        &self,
        row: &mut MemoryRow,
        index: usize,
        request: ScalarKind,
    ) -> Result<Option<ScalarValue>, CellError> {
        let cell = row.cell(index)?;
        let value = match (request, cell) {
            (_, Cell::Null) => None,
            (ScalarKind::Bool, Cell::Bool(b)) => Some(ScalarValue::Bool(*b)),
            (ScalarKind::Int, Cell::Int(i)) => Some(ScalarValue::Int(*i)),
            (ScalarKind::Float, Cell::Float(f)) => Some(ScalarValue::Float(*f)),
            (ScalarKind::Float, Cell::Int(i)) => Some(ScalarValue::Float(*i as f64)),
            (ScalarKind::Text, Cell::Text(s)) => Some(ScalarValue::Text(s.clone())),
            (ScalarKind::Bytes, Cell::Bytes(b)) => Some(ScalarValue::Bytes(b.clone())),
            (kind, other) => {
                let expected = match kind {
                    ScalarKind::Bool => "BOOLEAN",
                    ScalarKind::Int => "BIGINT",
                    ScalarKind::Float => "DOUBLE",
                    ScalarKind::Text => "TEXT",
                    ScalarKind::Bytes => "BLOB",
                };
                return Err(mismatch(index, expected, other));
            }
        };
        Ok(value)
    }
}
