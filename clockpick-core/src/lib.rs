//! Time-of-day value types and conversions for the clockpick time input.
//!
//! This crate is the pure half of clockpick: structured [`TimeValue`]s, the
//! [`TimeMode`] they are interpreted under, and the conversions between values
//! and their text form. It holds no interaction state; the widget state
//! machine lives in `clockpick-widget` and calls into this crate for every
//! parse, format, and range decision.
//!
//! # Example
//!
//! ```
//! use clockpick_core::{TimeMode, format_time, parse_time};
//!
//! let value = parse_time("09:05", TimeMode::H24)?;
//! assert_eq!(format_time(value, TimeMode::H12), "9:05 AM");
//! # Ok::<(), clockpick_core::TimeError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod convert;
pub mod error;
pub mod mode;
pub mod value;

pub use crate::{
    convert::{
        clamp_field, day_options, format_time, hour_from_24, hour_to_24, is_valid_time,
        parse_time, stepped_range,
    },
    error::TimeError,
    mode::TimeMode,
    value::{Meridiem, TimeField, TimeValue},
};
