//! Display mode a time value is interpreted under.

/// Pairing of the clock convention and the seconds flag.
///
/// A [`TimeValue`](crate::value::TimeValue) only has a text form together
/// with a mode; every parse and format call takes one. Modes are fixed per
/// widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeMode {
    /// Whether times display as 12-hour with a meridiem.
    pub use_12_hour: bool,
    /// Whether seconds are displayed and accepted.
    pub show_seconds: bool,
}

impl TimeMode {
    /// 24-hour clock without seconds.
    pub const H24: Self = Self {
        use_12_hour: false,
        show_seconds: false,
    };

    /// 12-hour clock without seconds.
    pub const H12: Self = Self {
        use_12_hour: true,
        show_seconds: false,
    };

    /// Returns the same clock convention with seconds enabled.
    pub const fn with_seconds(self) -> Self {
        Self {
            use_12_hour: self.use_12_hour,
            show_seconds: true,
        }
    }
}

impl Default for TimeMode {
    fn default() -> Self {
        Self::H24
    }
}
