//! The one error type shared by every date, time, and date-time operation.

use thiserror::Error as ThisError;

use crate::cal::field::ValueRange;


/// Something went wrong while building or transforming a date-time value.
///
/// None of these are transient: retrying the same call will fail the same
/// way. A failed call never produces a partial value, and the value it was
/// called on stays as it was.
#[derive(ThisError, PartialEq, Eq, Debug, Clone)]
pub enum Error {

    /// A required part of a value was missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The component the field was routed to does not know the field.
    #[error("unsupported field: {0}")]
    UnsupportedField(String),

    /// The component the field was routed to rejected the new value.
    #[error("invalid value for {field}: {value} (valid values {range})")]
    InvalidFieldValue {
        field: String,
        value: i64,
        range: ValueRange,
    },

    /// The result of an arithmetic operation does not fit in the
    /// supported range of dates.
    #[error("date-time arithmetic overflowed")]
    Overflow,

    /// The offset is bigger than eighteen hours either way.
    #[error("offset field out of range")]
    OffsetOutOfRange,

    /// The hours and minutes of an offset point in different directions.
    #[error("offset sign mismatch")]
    OffsetSignMismatch,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
