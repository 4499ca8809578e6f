//! Configuration for the time input widget.
//!
//! ## Usage
//!
//! Build a [`TimeInputArgs`] with the chainable setters, then hand it to
//! [`TimeInputController::new`](crate::controller::TimeInputController::new).
//! Validation happens once, up front; a constructed widget can rely on its
//! [`TimeInputConfig`] without re-checking it per event.
use std::sync::Arc;

use clockpick_core::{TimeError, TimeField, TimeMode, TimeValue, format_time, parse_time};
use derive_setters::Setters;
use thiserror::Error;

/// Configuration options for [`TimeInputController`].
///
/// [`TimeInputController`]: crate::controller::TimeInputController
#[derive(Clone, Setters)]
pub struct TimeInputArgs {
    /// Whether times display as 12-hour with a meridiem.
    pub use_12_hour: bool,
    /// Whether seconds are shown and accepted.
    pub show_seconds: bool,
    /// Step between minute options. Must be at least 1.
    pub minute_step: u8,
    /// Step between second options. Must be at least 1.
    pub second_step: u8,
    /// Inclusive lower bound for committed values, as a 24-hour `HH:MM`
    /// string.
    #[setters(strip_option, into)]
    pub min: Option<String>,
    /// Inclusive upper bound for committed values, as a 24-hour `HH:MM`
    /// string.
    #[setters(strip_option, into)]
    pub max: Option<String>,
    /// Whether 12-hour mode renders meridiem controls.
    pub show_am_pm: bool,
    /// Whether the widget starts disabled.
    pub disabled: bool,
    /// Text the presentation shows while no value is committed.
    #[setters(into)]
    pub placeholder: String,
    /// Initial committed value, as a canonical string for the mode.
    #[setters(strip_option, into)]
    pub value: Option<String>,
    /// Called with the canonical string on every commit.
    #[setters(skip)]
    pub on_commit: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl Default for TimeInputArgs {
    fn default() -> Self {
        Self {
            use_12_hour: false,
            show_seconds: false,
            minute_step: 1,
            second_step: 1,
            min: None,
            max: None,
            show_am_pm: true,
            disabled: false,
            placeholder: String::new(),
            value: None,
            on_commit: None,
        }
    }
}

impl TimeInputArgs {
    /// Sets the commit handler.
    pub fn on_commit<F>(mut self, on_commit: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_commit = Some(Arc::new(on_commit));
        self
    }

    /// Sets the commit handler using a shared callback.
    pub fn on_commit_shared(mut self, on_commit: Arc<dyn Fn(&str) + Send + Sync>) -> Self {
        self.on_commit = Some(on_commit);
        self
    }
}

/// Errors reported when widget configuration is invalid.
#[derive(Debug, Error)]
pub enum TimeInputConfigError {
    /// A step option was zero.
    #[error("{field} step must be at least 1")]
    ZeroStep {
        /// Which step option was zero.
        field: TimeField,
    },
    /// A bound did not parse as a 24-hour `HH:MM` string.
    #[error("{which} bound {text:?} is not a 24-hour time: {source}")]
    InvalidBound {
        /// Which bound failed, `"min"` or `"max"`.
        which: &'static str,
        /// The rejected bound text.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: TimeError,
    },
    /// The lower bound is after the upper bound.
    #[error("min bound {min:?} is after max bound {max:?}")]
    BoundsReversed {
        /// The configured lower bound.
        min: String,
        /// The configured upper bound.
        max: String,
    },
    /// The initial value did not parse under the configured mode.
    #[error("initial value {text:?} is not valid for the configured mode: {source}")]
    InvalidInitialValue {
        /// The rejected value text.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: TimeError,
    },
}

/// Validated, immutable widget configuration.
#[derive(Debug, Clone)]
pub struct TimeInputConfig {
    mode: TimeMode,
    minute_step: u8,
    second_step: u8,
    min: Option<TimeValue>,
    max: Option<TimeValue>,
    show_am_pm: bool,
    placeholder: String,
}

impl TimeInputConfig {
    /// Validates `args` and builds the configuration.
    ///
    /// Steps must be positive and bounds must parse as 24-hour `HH:MM`
    /// strings forming a non-empty window. The initial value is checked by
    /// [`TimeInputController::new`](crate::controller::TimeInputController::new),
    /// which also needs its parsed form.
    pub fn new(args: &TimeInputArgs) -> Result<Self, TimeInputConfigError> {
        if args.minute_step == 0 {
            return Err(TimeInputConfigError::ZeroStep {
                field: TimeField::Minutes,
            });
        }
        if args.second_step == 0 {
            return Err(TimeInputConfigError::ZeroStep {
                field: TimeField::Seconds,
            });
        }
        let min = parse_bound("min", args.min.as_deref())?;
        let max = parse_bound("max", args.max.as_deref())?;
        if let (Some(min), Some(max)) = (min, max) {
            if min.minute_of_day() > max.minute_of_day() {
                return Err(TimeInputConfigError::BoundsReversed {
                    min: format_time(min, TimeMode::H24),
                    max: format_time(max, TimeMode::H24),
                });
            }
        }
        Ok(Self {
            mode: TimeMode {
                use_12_hour: args.use_12_hour,
                show_seconds: args.show_seconds,
            },
            minute_step: args.minute_step,
            second_step: args.second_step,
            min,
            max,
            show_am_pm: args.show_am_pm,
            placeholder: args.placeholder.clone(),
        })
    }

    /// Returns the display mode.
    pub fn mode(&self) -> TimeMode {
        self.mode
    }

    /// Returns the step between minute options.
    pub fn minute_step(&self) -> u8 {
        self.minute_step
    }

    /// Returns the step between second options.
    pub fn second_step(&self) -> u8 {
        self.second_step
    }

    /// Returns the inclusive lower bound, if configured.
    pub fn min(&self) -> Option<TimeValue> {
        self.min
    }

    /// Returns the inclusive upper bound, if configured.
    pub fn max(&self) -> Option<TimeValue> {
        self.max
    }

    /// Returns whether 12-hour mode renders meridiem controls.
    pub fn show_am_pm(&self) -> bool {
        self.show_am_pm
    }

    /// Returns the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

fn parse_bound(
    which: &'static str,
    text: Option<&str>,
) -> Result<Option<TimeValue>, TimeInputConfigError> {
    let Some(text) = text else {
        return Ok(None);
    };
    parse_time(text, TimeMode::H24)
        .map(Some)
        .map_err(|source| TimeInputConfigError::InvalidBound {
            which,
            text: text.to_string(),
            source,
        })
}
