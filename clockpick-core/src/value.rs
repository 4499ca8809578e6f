//! Structured time-of-day values.
use std::fmt;

use crate::{convert, error::TimeError, mode::TimeMode};

/// Indicates whether a 12-hour time is before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

impl Meridiem {
    /// Returns the display token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    /// Returns the opposite half of the day.
    pub const fn toggled(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }
}

/// Identifies one sub-field of a time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// The hour field.
    Hours,
    /// The minute field.
    Minutes,
    /// The second field.
    Seconds,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// A validated time of day.
///
/// Values carry their shape: a 24-hour value has hour 0-23 and no meridiem,
/// a 12-hour value has hour 1-12 and a meridiem. The constructors reject
/// anything else, so a value outside those ranges cannot exist. Values are
/// replaced, never mutated; the `with_*` methods return updated copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
    second: u8,
    meridiem: Option<Meridiem>,
}

impl TimeValue {
    /// Creates a 24-hour value. The hour must be 0-23, minute and second 0-59.
    pub fn new_24(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        Self {
            hour,
            minute,
            second,
            meridiem: None,
        }
        .validated()
    }

    /// Creates a 12-hour value. The hour must be 1-12, minute and second 0-59.
    pub fn new_12(
        hour: u8,
        minute: u8,
        second: u8,
        meridiem: Meridiem,
    ) -> Result<Self, TimeError> {
        Self {
            hour,
            minute,
            second,
            meridiem: Some(meridiem),
        }
        .validated()
    }

    /// Returns midnight in the shape matching `mode`.
    pub fn midnight(mode: TimeMode) -> Self {
        if mode.use_12_hour {
            Self {
                hour: 12,
                minute: 0,
                second: 0,
                meridiem: Some(Meridiem::Am),
            }
        } else {
            Self {
                hour: 0,
                minute: 0,
                second: 0,
                meridiem: None,
            }
        }
    }

    /// Returns the hour in the value's own shape.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the meridiem, present exactly for 12-hour values.
    pub fn meridiem(&self) -> Option<Meridiem> {
        self.meridiem
    }

    /// Returns whether the value is in 12-hour shape.
    pub fn is_12_hour(&self) -> bool {
        self.meridiem.is_some()
    }

    /// Returns the value converted to 24-hour shape.
    pub fn into_24(self) -> Self {
        match self.meridiem {
            Some(meridiem) => Self {
                hour: convert::hour_to_24(self.hour, meridiem),
                meridiem: None,
                ..self
            },
            None => self,
        }
    }

    /// Returns the value converted to 12-hour shape.
    pub fn into_12(self) -> Self {
        match self.meridiem {
            Some(_) => self,
            None => {
                let (hour, meridiem) = convert::hour_from_24(self.hour);
                Self {
                    hour,
                    meridiem: Some(meridiem),
                    ..self
                }
            }
        }
    }

    /// Returns a copy with one field replaced, re-validated for the value's
    /// shape.
    pub fn with_field(self, field: TimeField, value: u8) -> Result<Self, TimeError> {
        let next = match field {
            TimeField::Hours => Self {
                hour: value,
                ..self
            },
            TimeField::Minutes => Self {
                minute: value,
                ..self
            },
            TimeField::Seconds => Self {
                second: value,
                ..self
            },
        };
        next.validated()
    }

    /// Returns a copy with the meridiem replaced.
    ///
    /// Returned unchanged for 24-hour values, which carry no meridiem.
    pub fn with_meridiem(self, meridiem: Meridiem) -> Self {
        if self.meridiem.is_none() {
            return self;
        }
        Self {
            meridiem: Some(meridiem),
            ..self
        }
    }

    /// Returns minutes since midnight, normalizing 12-hour values first.
    ///
    /// Seconds do not contribute; two values in the same minute compare
    /// equal for ordering purposes.
    pub fn minute_of_day(&self) -> u16 {
        let hour = match self.meridiem {
            Some(meridiem) => convert::hour_to_24(self.hour, meridiem),
            None => self.hour,
        };
        u16::from(hour) * 60 + u16::from(self.minute)
    }

    fn validated(self) -> Result<Self, TimeError> {
        let hour_ok = match self.meridiem {
            Some(_) => (1..=12).contains(&self.hour),
            None => self.hour <= 23,
        };
        if !hour_ok {
            return Err(TimeError::OutOfRange {
                field: TimeField::Hours,
                value: self.hour,
            });
        }
        if self.minute > 59 {
            return Err(TimeError::OutOfRange {
                field: TimeField::Minutes,
                value: self.minute,
            });
        }
        if self.second > 59 {
            return Err(TimeError::OutOfRange {
                field: TimeField::Seconds,
                value: self.second,
            });
        }
        Ok(self)
    }
}
