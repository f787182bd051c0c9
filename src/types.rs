//! Core data types for sql-temporal
//!
//! This module provides the parameter and result envelopes the adapter works
//! with. Each envelope has a temporal side the adapter understands and an
//! `Other` side it passes through or hands to a fallback untouched.

use temporal_types::{PrimitiveValue, TemporalKind, TemporalValue};

/// A query parameter on its way to the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound<T> {
    /// A rich temporal value that needs downgrading.
    Temporal(TemporalValue),
    /// Anything else; passed through unchanged.
    Other(T),
}

impl<T> From<TemporalValue> for Outbound<T> {
    fn from(value: TemporalValue) -> Self {
        Outbound::Temporal(value)
    }
}

/// A query parameter ready to be bound by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue<T> {
    /// A temporal primitive produced by normalization.
    Primitive(PrimitiveValue),
    /// The untouched non-temporal parameter.
    Other(T),
}

impl<T> BindValue<T> {
    /// Try to get the bound primitive.
    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            BindValue::Primitive(p) => Some(p),
            BindValue::Other(_) => None,
        }
    }

    /// Try to get the passed-through parameter.
    pub fn into_other(self) -> Option<T> {
        match self {
            BindValue::Primitive(_) => None,
            BindValue::Other(other) => Some(other),
        }
    }
}

/// The type a caller wants a column read as.
///
/// `T` is the request type of the fallback resolver handling every
/// non-temporal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requested<T> {
    Temporal(TemporalKind),
    Other(T),
}

impl<T> From<TemporalKind> for Requested<T> {
    fn from(kind: TemporalKind) -> Self {
        Requested::Temporal(kind)
    }
}

/// A column value read from a cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<V> {
    /// A rich temporal value, or `None` when the column was SQL NULL.
    Temporal(Option<TemporalValue>),
    /// Whatever the fallback resolver produced, unmodified.
    Other(V),
}

impl<V> Extracted<V> {
    /// Try to get the temporal result.
    ///
    /// Returns `None` for fallback results; `Some(None)` for a NULL column.
    pub fn into_temporal(self) -> Option<Option<TemporalValue>> {
        match self {
            Extracted::Temporal(value) => Some(value),
            Extracted::Other(_) => None,
        }
    }

    /// Try to get the fallback result.
    pub fn into_other(self) -> Option<V> {
        match self {
            Extracted::Temporal(_) => None,
            Extracted::Other(other) => Some(other),
        }
    }
}
