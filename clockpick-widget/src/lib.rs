//! Headless time input widget built on `clockpick-core`.
//!
//! The crate owns everything about a time input except pixels: the dropdown
//! open/closed state machine, the text buffer, option selection, bounds
//! checking, and commit notifications. A presentation layer renders the
//! [`TimeInputSnapshot`] and forwards user interactions to
//! [`TimeInputController`] (or to a shared [`TimeInputHandle`] when closures
//! need to capture it).
//!
//! # Example
//!
//! ```
//! use clockpick_widget::{TimeField, TimeInputArgs, TimeInputController};
//!
//! let mut input = TimeInputController::new(
//!     TimeInputArgs::default().use_12_hour(true).placeholder("--:--"),
//! )?;
//! input.activate();
//! input.select_option(TimeField::Hours, 2);
//! assert_eq!(input.display_text(), "2:00 AM");
//! # Ok::<(), clockpick_widget::TimeInputConfigError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod controller;
pub mod handle;
pub mod snapshot;

pub use clockpick_core::{Meridiem, TimeError, TimeField, TimeMode, TimeValue};

pub use crate::{
    config::{TimeInputArgs, TimeInputConfig, TimeInputConfigError},
    controller::TimeInputController,
    handle::TimeInputHandle,
    snapshot::TimeInputSnapshot,
};
