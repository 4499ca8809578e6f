//! Conversions between time text and structured values.
//!
//! ## Usage
//!
//! Every conversion is a pure function of its arguments. Parsing is strict:
//! text that does not match the mode's shape is rejected, never corrected.
//! [`format_time`] produces the canonical string form, and
//! [`parse_time`] accepts every string [`format_time`] can produce, so the
//! two are mutual inverses over valid values.
use crate::{
    error::TimeError,
    mode::TimeMode,
    value::{Meridiem, TimeField, TimeValue},
};

/// Parses `text` as a time of day in the given `mode`.
///
/// Surrounding whitespace is ignored. The hour may be one or two digits,
/// minutes and seconds exactly two. In 12-hour mode a trailing `AM`/`PM`
/// token is required, case-insensitively, separated by optional whitespace.
/// The `:SS` segment is only accepted when the mode shows seconds, and a
/// missing segment reads as zero seconds.
///
/// Shape mismatches yield [`TimeError::InvalidFormat`]; well-formed fields
/// outside their range yield [`TimeError::OutOfRange`].
///
/// # Examples
///
/// ```
/// use clockpick_core::{TimeMode, parse_time};
///
/// let value = parse_time("2:45 PM", TimeMode::H12)?;
/// assert_eq!((value.hour(), value.minute()), (2, 45));
/// # Ok::<(), clockpick_core::TimeError>(())
/// ```
pub fn parse_time(text: &str, mode: TimeMode) -> Result<TimeValue, TimeError> {
    let trimmed = text.trim();
    let (clock, meridiem) = if mode.use_12_hour {
        let (clock, meridiem) = split_meridiem(trimmed).ok_or(TimeError::InvalidFormat)?;
        (clock, Some(meridiem))
    } else {
        (trimmed, None)
    };

    let mut parts = clock.split(':');
    let hour = parse_field(parts.next().ok_or(TimeError::InvalidFormat)?, TimeField::Hours)?;
    let minute = parse_field(
        parts.next().ok_or(TimeError::InvalidFormat)?,
        TimeField::Minutes,
    )?;
    let second = match parts.next() {
        None => 0,
        Some(part) => {
            if !mode.show_seconds {
                return Err(TimeError::InvalidFormat);
            }
            parse_field(part, TimeField::Seconds)?
        }
    };
    if parts.next().is_some() {
        return Err(TimeError::InvalidFormat);
    }

    match meridiem {
        Some(meridiem) => TimeValue::new_12(hour, minute, second, meridiem),
        None => TimeValue::new_24(hour, minute, second),
    }
}

/// Formats `value` canonically for the given `mode`.
///
/// The value's shape is converted to the mode's first, so any valid value
/// formats under any mode. 24-hour hours are zero-padded to two digits;
/// 12-hour hours are not, following common clock display convention.
/// Seconds appear only when the mode shows them.
pub fn format_time(value: TimeValue, mode: TimeMode) -> String {
    let value = if mode.use_12_hour {
        value.into_12()
    } else {
        value.into_24()
    };
    let hour = if mode.use_12_hour {
        value.hour().to_string()
    } else {
        format_two_digit(value.hour())
    };
    let mut text = format!("{hour}:{}", format_two_digit(value.minute()));
    if mode.show_seconds {
        text.push(':');
        text.push_str(&format_two_digit(value.second()));
    }
    if let Some(meridiem) = value.meridiem() {
        text.push(' ');
        text.push_str(meridiem.as_str());
    }
    text
}

/// Converts a 12-hour display hour and meridiem to the 24-hour hour.
///
/// The hour must already be a valid 12-hour hour (1-12).
pub fn hour_to_24(hour: u8, meridiem: Meridiem) -> u8 {
    match meridiem {
        Meridiem::Am if hour == 12 => 0,
        Meridiem::Am => hour,
        Meridiem::Pm if hour == 12 => 12,
        Meridiem::Pm => hour + 12,
    }
}

/// Converts a 24-hour hour (0-23) to its 12-hour display hour and meridiem.
pub fn hour_from_24(hour: u8) -> (u8, Meridiem) {
    match hour {
        0 => (12, Meridiem::Am),
        1..=11 => (hour, Meridiem::Am),
        12 => (12, Meridiem::Pm),
        _ => (hour - 12, Meridiem::Pm),
    }
}

/// Returns `0, step, 2 * step, ..` for every multiple below `limit`.
///
/// `step` must be positive; widget configuration validates this before any
/// option list is built.
pub fn stepped_range(limit: u8, step: u8) -> Vec<u8> {
    debug_assert!(step > 0, "stepped_range requires a positive step");
    if step == 0 {
        return Vec::new();
    }
    (0..limit).step_by(usize::from(step)).collect()
}

/// Clamps a raw number into the legal range of `field` under `mode`.
pub fn clamp_field(field: TimeField, value: u8, mode: TimeMode) -> u8 {
    match field {
        TimeField::Hours if mode.use_12_hour => value.clamp(1, 12),
        TimeField::Hours => value.min(23),
        TimeField::Minutes | TimeField::Seconds => value.min(59),
    }
}

/// Returns whether `text` parses as a time in the given `mode`.
///
/// Defined directly in terms of [`parse_time`], so there is a single
/// validation path for text input.
pub fn is_valid_time(text: &str, mode: TimeMode) -> bool {
    parse_time(text, mode).is_ok()
}

/// Canonical strings for a whole day at the given minute step.
///
/// Useful for flat single-list presentations. `minute_step` must be
/// positive.
pub fn day_options(mode: TimeMode, minute_step: u8) -> Vec<String> {
    let minutes = stepped_range(60, minute_step);
    let mut options = Vec::with_capacity(24 * minutes.len());
    for hour in 0u8..24 {
        for &minute in &minutes {
            if let Ok(value) = TimeValue::new_24(hour, minute, 0) {
                options.push(format_time(value, mode));
            }
        }
    }
    options
}

fn split_meridiem(text: &str) -> Option<(&str, Meridiem)> {
    if text.len() < 2 || !text.is_char_boundary(text.len() - 2) {
        return None;
    }
    let (clock, token) = text.split_at(text.len() - 2);
    let meridiem = if token.eq_ignore_ascii_case("AM") {
        Meridiem::Am
    } else if token.eq_ignore_ascii_case("PM") {
        Meridiem::Pm
    } else {
        return None;
    };
    Some((clock.trim_end(), meridiem))
}

fn parse_field(part: &str, field: TimeField) -> Result<u8, TimeError> {
    let width_ok = match field {
        TimeField::Hours => (1..=2).contains(&part.len()),
        TimeField::Minutes | TimeField::Seconds => part.len() == 2,
    };
    if !width_ok || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::InvalidFormat);
    }
    part.parse().map_err(|_| TimeError::InvalidFormat)
}

fn format_two_digit(value: u8) -> String {
    format!("{value:02}")
}
