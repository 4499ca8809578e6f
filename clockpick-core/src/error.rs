//! Errors produced while converting between time text and values.
use thiserror::Error;

use crate::value::TimeField;

/// Errors that can occur while parsing or constructing a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The text does not have the shape of a time in the requested mode.
    #[error("text does not match the expected time format")]
    InvalidFormat,
    /// A field value is outside its legal range.
    #[error("{value} is out of range for {field}")]
    OutOfRange {
        /// Field the value was meant for.
        field: TimeField,
        /// The rejected value.
        value: u8,
    },
}
