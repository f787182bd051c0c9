//! Error types for temporal value parsing.

use thiserror::Error;

/// Errors that can occur while parsing temporal values and type tags.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemporalTypesError {
    /// Unknown temporal kind name.
    #[error("Unknown temporal kind: {0}. Expected one of local-date-time, local-date, local-time, offset-date-time, offset-time, zoned-date-time")]
    UnknownKind(String),

    /// Invalid offset time string format.
    #[error("Invalid offset time format: {value}. Expected HH:MM:SS[.fffffffff] followed by Z or +HH:MM")]
    InvalidOffsetTime { value: String },

    /// UTC offset outside of the representable range.
    #[error("UTC offset out of range: {seconds} seconds")]
    OffsetOutOfRange { seconds: i32 },
}

/// Result type for temporal value parsing.
pub type Result<T> = std::result::Result<T, TemporalTypesError>;
