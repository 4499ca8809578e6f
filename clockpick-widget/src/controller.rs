//! Interaction state machine for the time input widget.
//!
//! ## Usage
//!
//! Construct a [`TimeInputController`] from [`TimeInputArgs`], forward user
//! interactions to its event methods, and render from
//! [`TimeInputController::snapshot`]. Outside-click detection and focus
//! ownership stay in the presentation layer; the controller only consumes
//! the resulting events.
//!
//! Commits are the single notification channel: every accepted value change
//! invokes the configured callback with the canonical string, and rejected
//! input (malformed text, out-of-bounds values) changes nothing and notifies
//! nobody.
use std::sync::Arc;

use clockpick_core::{
    Meridiem, TimeField, TimeValue, clamp_field, convert, format_time, parse_time, stepped_range,
};
use tracing::{debug, trace};

use crate::{
    config::{TimeInputArgs, TimeInputConfig, TimeInputConfigError},
    snapshot::TimeInputSnapshot,
};

/// Owns the interaction state for one time input widget.
///
/// The controller is single-threaded and processes events strictly in call
/// order; a commit notification for one event is emitted before the next
/// event runs. Wrap it in a
/// [`TimeInputHandle`](crate::handle::TimeInputHandle) when UI closures need
/// shared access.
pub struct TimeInputController {
    config: TimeInputConfig,
    value: Option<TimeValue>,
    buffer: String,
    is_open: bool,
    active_field: Option<TimeField>,
    disabled: bool,
    on_commit: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl TimeInputController {
    /// Validates `args` and builds a closed controller.
    ///
    /// The initial value, when set, must be a canonical string for the
    /// configured mode. It is stored without a commit notification and
    /// without bounds checking; bounds gate interactive commits only.
    pub fn new(args: TimeInputArgs) -> Result<Self, TimeInputConfigError> {
        let config = TimeInputConfig::new(&args)?;
        let value = match args.value.as_deref() {
            Some(text) => {
                let parsed = parse_time(text, config.mode()).map_err(|source| {
                    TimeInputConfigError::InvalidInitialValue {
                        text: text.to_string(),
                        source,
                    }
                })?;
                Some(parsed)
            }
            None => None,
        };
        let buffer = match value {
            Some(value) => format_time(value, config.mode()),
            None => String::new(),
        };
        Ok(Self {
            config,
            value,
            buffer,
            is_open: false,
            active_field: None,
            disabled: args.disabled,
            on_commit: args.on_commit,
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &TimeInputConfig {
        &self.config
    }

    /// Returns the committed value, if any.
    pub fn value(&self) -> Option<TimeValue> {
        self.value
    }

    /// Returns the committed value as a canonical string.
    pub fn committed_text(&self) -> Option<String> {
        self.value.map(|value| format_time(value, self.config.mode()))
    }

    /// Returns the text buffer as the presentation should display it.
    ///
    /// While the user is typing this may be transiently invalid text.
    pub fn display_text(&self) -> &str {
        &self.buffer
    }

    /// Returns whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns whether the widget ignores input.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the sub-control marked active for highlighting.
    pub fn active_field(&self) -> Option<TimeField> {
        self.active_field
    }

    /// Opens the dropdown. No-op while disabled or already open.
    pub fn activate(&mut self) {
        if self.disabled {
            debug!("activate ignored: widget is disabled");
            return;
        }
        if !self.is_open {
            self.is_open = true;
            trace!("dropdown opened");
        }
    }

    /// Flips the dropdown between open and closed. No-op while disabled.
    pub fn toggle_open(&mut self) {
        if self.disabled {
            debug!("toggle ignored: widget is disabled");
            return;
        }
        if self.is_open {
            self.close();
        } else {
            self.is_open = true;
        }
        trace!(is_open = self.is_open, "dropdown toggled");
    }

    /// Closes the dropdown in response to an interaction outside the widget.
    pub fn outside_interaction(&mut self) {
        if self.is_open {
            self.close();
            trace!("dropdown closed by outside interaction");
        }
    }

    /// Replaces one field of the current value from a dropdown option and
    /// commits the result.
    ///
    /// The raw number is clamped into the field's range first. With no
    /// committed value yet, the edit starts from midnight. On success the
    /// canonical string is committed and the dropdown closes; a value that
    /// falls outside the configured bounds leaves every part of the state
    /// untouched and keeps the dropdown open.
    ///
    /// Returns whether a commit happened.
    pub fn select_option(&mut self, field: TimeField, value: u8) -> bool {
        let text = self.select_option_inner(field, value);
        self.emit(text)
    }

    /// Applies the event and returns the committed text, leaving the
    /// notification to the caller; the shared handle emits it after its lock
    /// is released. The `_inner` siblings below follow the same contract.
    pub(crate) fn select_option_inner(&mut self, field: TimeField, value: u8) -> Option<String> {
        if self.disabled || !self.is_open {
            debug!(?field, value, "option select ignored");
            return None;
        }
        if field == TimeField::Seconds && !self.config.mode().show_seconds {
            debug!("option select ignored: seconds are hidden");
            return None;
        }
        let mode = self.config.mode();
        let clamped = clamp_field(field, value, mode);
        let base = self.value.unwrap_or_else(|| TimeValue::midnight(mode));
        let Ok(candidate) = base.with_field(field, clamped) else {
            debug!(?field, value, "option select rejected: invalid field value");
            return None;
        };
        let text = self.try_commit(candidate)?;
        self.buffer = text.clone();
        self.close();
        Some(text)
    }

    /// Sets the meridiem on the current value and commits the result.
    ///
    /// 12-hour mode only. Selecting the meridiem the value already has is a
    /// no-op. The dropdown stays open either way so other fields can still
    /// be adjusted.
    ///
    /// Returns whether a commit happened.
    pub fn select_meridiem(&mut self, meridiem: Meridiem) -> bool {
        let text = self.select_meridiem_inner(meridiem);
        self.emit(text)
    }

    pub(crate) fn select_meridiem_inner(&mut self, meridiem: Meridiem) -> Option<String> {
        if self.disabled || !self.is_open || !self.config.mode().use_12_hour {
            debug!(?meridiem, "meridiem select ignored");
            return None;
        }
        let base = self
            .value
            .unwrap_or_else(|| TimeValue::midnight(self.config.mode()));
        if base.meridiem() == Some(meridiem) {
            return None;
        }
        let candidate = base.with_meridiem(meridiem);
        let text = self.try_commit(candidate)?;
        self.buffer = text.clone();
        Some(text)
    }

    /// Flips AM/PM on the current value and commits the result.
    ///
    /// Returns whether a commit happened.
    pub fn toggle_meridiem(&mut self) -> bool {
        let text = self.toggle_meridiem_inner();
        self.emit(text)
    }

    pub(crate) fn toggle_meridiem_inner(&mut self) -> Option<String> {
        if self.disabled || !self.is_open || !self.config.mode().use_12_hour {
            debug!("meridiem toggle ignored");
            return None;
        }
        let base = self
            .value
            .unwrap_or_else(|| TimeValue::midnight(self.config.mode()));
        let meridiem = base.meridiem()?;
        self.select_meridiem_inner(meridiem.toggled())
    }

    /// Replaces the text buffer with `raw` and commits it when it parses.
    ///
    /// The buffer always echoes `raw`, so the field shows exactly what was
    /// typed until [`blur`](Self::blur) resynchronizes it. Valid text is
    /// committed immediately and the notification carries the canonical
    /// form, normalizing variants like `9:05` to `09:05` without waiting for
    /// blur. Malformed or out-of-bounds text keeps the committed value.
    ///
    /// Returns whether a commit happened.
    pub fn edit_text(&mut self, raw: impl Into<String>) -> bool {
        let text = self.edit_text_inner(raw);
        self.emit(text)
    }

    pub(crate) fn edit_text_inner(&mut self, raw: impl Into<String>) -> Option<String> {
        if self.disabled {
            debug!("text edit ignored: widget is disabled");
            return None;
        }
        self.buffer = raw.into();
        match parse_time(&self.buffer, self.config.mode()) {
            Ok(parsed) => self.try_commit(parsed),
            Err(error) => {
                debug!(%error, "text kept without commit");
                None
            }
        }
    }

    /// Resynchronizes the buffer with the committed value, discarding any
    /// transient edit. The field is never left showing rejected text after
    /// focus moves away.
    pub fn blur(&mut self) {
        if self.disabled {
            return;
        }
        self.buffer = match self.value {
            Some(value) => format_time(value, self.config.mode()),
            None => String::new(),
        };
        trace!("buffer resynchronized on blur");
    }

    /// Marks `field` as the active sub-control while the dropdown is open.
    pub fn focus_field(&mut self, field: TimeField) {
        if self.disabled || !self.is_open {
            return;
        }
        if field == TimeField::Seconds && !self.config.mode().show_seconds {
            return;
        }
        self.active_field = Some(field);
        trace!(?field, "sub-control focused");
    }

    /// Enables or disables the widget. Disabling closes the dropdown; a
    /// disabled widget suppresses every interaction event.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        if disabled {
            self.close();
        }
        trace!(disabled, "disabled state changed");
    }

    /// Replaces the committed value from a canonical string without a commit
    /// notification.
    ///
    /// This is the channel for controlled embeddings pushing a value down;
    /// it works while disabled and bypasses the bounds, which gate
    /// interactive commits only. Empty or unparseable text clears the value.
    ///
    /// Returns whether `text` parsed.
    pub fn set_value(&mut self, text: &str) -> bool {
        let mode = self.config.mode();
        match parse_time(text, mode) {
            Ok(value) => {
                self.value = Some(value);
                self.buffer = format_time(value, mode);
                trace!(value = %self.buffer, "value replaced from owner");
                true
            }
            Err(error) => {
                if !text.is_empty() {
                    debug!(%error, "pushed value cleared: text does not parse");
                }
                self.value = None;
                self.buffer = String::new();
                false
            }
        }
    }

    /// Canonical options for a whole day at the configured minute step.
    pub fn day_options(&self) -> Vec<String> {
        convert::day_options(self.config.mode(), self.config.minute_step())
    }

    /// Captures the render state for the presentation layer.
    pub fn snapshot(&self) -> TimeInputSnapshot {
        let mode = self.config.mode();
        let hour_options: Vec<u8> = if mode.use_12_hour {
            (1..=12).collect()
        } else {
            (0..24).collect()
        };
        let minute_options = stepped_range(60, self.config.minute_step());
        let second_options = if mode.show_seconds {
            stepped_range(60, self.config.second_step())
        } else {
            Vec::new()
        };
        let selected_hour = self.value.map(|value| value.hour());
        let selected_minute = self
            .value
            .map(|value| value.minute())
            .filter(|minute| minute_options.contains(minute));
        let selected_second = self
            .value
            .map(|value| value.second())
            .filter(|second| second_options.contains(second));
        TimeInputSnapshot {
            display_text: self.buffer.clone(),
            placeholder: self.config.placeholder().to_string(),
            is_open: self.is_open,
            disabled: self.disabled,
            active_field: self.active_field,
            hour_options,
            minute_options,
            second_options,
            selected_hour,
            selected_minute,
            selected_second,
            meridiem: self.value.and_then(|value| value.meridiem()),
            shows_meridiem: mode.use_12_hour && self.config.show_am_pm(),
        }
    }

    /// Clone of the commit callback, for emitting a notification outside the
    /// handle's lock.
    pub(crate) fn commit_callback(&self) -> Option<Arc<dyn Fn(&str) + Send + Sync>> {
        self.on_commit.clone()
    }

    fn close(&mut self) {
        self.is_open = false;
        self.active_field = None;
    }

    // Notification runs after the event has fully settled the state.
    fn emit(&self, text: Option<String>) -> bool {
        match text {
            Some(text) => {
                if let Some(on_commit) = &self.on_commit {
                    on_commit(&text);
                }
                true
            }
            None => false,
        }
    }

    fn try_commit(&mut self, candidate: TimeValue) -> Option<String> {
        if !self.within_bounds(candidate) {
            debug!("commit rejected: value is outside the configured bounds");
            return None;
        }
        let text = format_time(candidate, self.config.mode());
        self.value = Some(candidate);
        trace!(value = %text, "value committed");
        Some(text)
    }

    fn within_bounds(&self, candidate: TimeValue) -> bool {
        let minute = candidate.minute_of_day();
        if let Some(min) = self.config.min() {
            if minute < min.minute_of_day() {
                return false;
            }
        }
        if let Some(max) = self.config.max() {
            if minute > max.minute_of_day() {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use rstest::rstest;

    use super::*;

    fn recording_args() -> (TimeInputArgs, Arc<Mutex<Vec<String>>>) {
        let committed = Arc::new(Mutex::new(Vec::new()));
        let sink = committed.clone();
        let args = TimeInputArgs::default()
            .on_commit(move |text: &str| sink.lock().push(text.to_string()));
        (args, committed)
    }

    #[test]
    fn test_starts_closed_with_initial_value() {
        let (args, committed) = recording_args();
        let input = TimeInputController::new(args.value("14:30")).expect("valid configuration");
        assert!(!input.is_open());
        assert_eq!(input.display_text(), "14:30");
        assert_eq!(input.value().map(|v| v.minute_of_day()), Some(870));
        assert!(committed.lock().is_empty(), "construction must not notify");
    }

    #[test]
    fn test_activate_and_toggle() {
        let mut input =
            TimeInputController::new(TimeInputArgs::default()).expect("valid configuration");
        input.activate();
        assert!(input.is_open());
        input.activate();
        assert!(input.is_open(), "activate while open is a no-op");
        input.toggle_open();
        assert!(!input.is_open());
        input.toggle_open();
        assert!(input.is_open());
    }

    #[test]
    fn test_outside_interaction_closes_and_clears_focus() {
        let mut input =
            TimeInputController::new(TimeInputArgs::default()).expect("valid configuration");
        input.activate();
        input.focus_field(TimeField::Minutes);
        assert_eq!(input.active_field(), Some(TimeField::Minutes));
        input.outside_interaction();
        assert!(!input.is_open());
        assert_eq!(input.active_field(), None);
        input.outside_interaction();
        assert!(!input.is_open(), "outside interaction while closed is a no-op");
    }

    #[test]
    fn test_disabled_widget_ignores_activation() {
        let (args, committed) = recording_args();
        let mut input =
            TimeInputController::new(args.disabled(true)).expect("valid configuration");
        input.activate();
        assert!(!input.is_open());
        input.toggle_open();
        assert!(!input.is_open());
        assert!(!input.select_option(TimeField::Hours, 9));
        assert!(!input.edit_text("09:00"));
        assert_eq!(input.display_text(), "");
        assert!(committed.lock().is_empty());
    }

    #[test]
    fn test_select_option_commits_canonical_and_closes() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args.use_12_hour(true).value("2:00 PM"))
            .expect("valid configuration");
        input.activate();
        assert!(input.select_option(TimeField::Minutes, 45));
        assert_eq!(committed.lock().as_slice(), ["2:45 PM"]);
        assert_eq!(input.display_text(), "2:45 PM");
        assert!(!input.is_open(), "option selection closes the dropdown");
    }

    #[test]
    fn test_select_option_requires_open_dropdown() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args).expect("valid configuration");
        assert!(!input.select_option(TimeField::Hours, 9));
        assert!(committed.lock().is_empty());
    }

    #[test]
    fn test_select_option_clamps_raw_values() {
        let mut input =
            TimeInputController::new(TimeInputArgs::default()).expect("valid configuration");
        input.activate();
        assert!(input.select_option(TimeField::Hours, 99));
        assert_eq!(input.display_text(), "23:00");
        input.activate();
        assert!(input.select_option(TimeField::Minutes, 200));
        assert_eq!(input.display_text(), "23:59");
    }

    #[test]
    fn test_select_option_from_unset_value_edits_midnight() {
        let mut input = TimeInputController::new(TimeInputArgs::default().use_12_hour(true))
            .expect("valid configuration");
        input.activate();
        assert!(input.select_option(TimeField::Hours, 3));
        assert_eq!(input.display_text(), "3:00 AM");
    }

    #[test]
    fn test_select_option_ignores_hidden_seconds() {
        let mut input =
            TimeInputController::new(TimeInputArgs::default()).expect("valid configuration");
        input.activate();
        assert!(!input.select_option(TimeField::Seconds, 30));
        assert!(input.is_open());
    }

    #[test]
    fn test_select_option_commits_seconds_when_shown() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args.show_seconds(true).value("14:30:00"))
            .expect("valid configuration");
        input.activate();
        assert!(input.select_option(TimeField::Seconds, 45));
        assert_eq!(committed.lock().as_slice(), ["14:30:45"]);
        assert_eq!(input.display_text(), "14:30:45");
        assert!(!input.is_open());
    }

    #[test]
    fn test_bounds_reject_select_and_keep_dropdown_open() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(
            args.use_12_hour(true)
                .min("09:00")
                .max("17:00")
                .value("10:00 AM"),
        )
        .expect("valid configuration");
        input.activate();
        assert!(!input.select_option(TimeField::Hours, 8));
        assert_eq!(input.display_text(), "10:00 AM");
        assert_eq!(input.committed_text().as_deref(), Some("10:00 AM"));
        assert!(committed.lock().is_empty());
        assert!(input.is_open(), "rejected selection keeps the dropdown open");

        assert!(input.select_option(TimeField::Hours, 11));
        assert_eq!(committed.lock().as_slice(), ["11:00 AM"]);
        assert!(!input.is_open());
    }

    #[rstest(text, accepted,
        case("09:00", true),
        case("17:00", true),
        case("12:30", true),
        case("17:01", false),
        case("08:59", false),
    )]
    fn test_bounds_are_inclusive(text: &str, accepted: bool) {
        let mut input = TimeInputController::new(
            TimeInputArgs::default().min("09:00").max("17:00"),
        )
        .expect("valid configuration");
        assert_eq!(input.edit_text(text), accepted);
    }

    #[test]
    fn test_edit_text_commits_canonical_notification_keeps_raw_buffer() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args).expect("valid configuration");
        assert!(input.edit_text("9:05"));
        assert_eq!(committed.lock().as_slice(), ["09:05"]);
        assert_eq!(input.display_text(), "9:05", "buffer echoes the raw text");
        input.blur();
        assert_eq!(input.display_text(), "09:05");
    }

    #[test]
    fn test_edit_text_commit_keeps_the_dropdown_open() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args).expect("valid configuration");
        input.activate();
        assert!(input.edit_text("09:00"));
        assert!(input.is_open(), "typing commits without closing the dropdown");
        assert_eq!(committed.lock().as_slice(), ["09:00"]);
    }

    #[test]
    fn test_edit_text_invalid_keeps_value_and_buffer() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args.value("14:30")).expect("valid configuration");
        assert!(!input.edit_text("9:99"));
        assert_eq!(input.display_text(), "9:99");
        assert_eq!(input.committed_text().as_deref(), Some("14:30"));
        assert!(committed.lock().is_empty());
        input.blur();
        assert_eq!(input.display_text(), "14:30");
    }

    #[test]
    fn test_edit_text_out_of_bounds_is_silently_rejected() {
        let (args, committed) = recording_args();
        let mut input =
            TimeInputController::new(args.min("09:00")).expect("valid configuration");
        assert!(!input.edit_text("08:00"));
        assert_eq!(input.display_text(), "08:00");
        assert_eq!(input.value(), None);
        assert!(committed.lock().is_empty());
        input.blur();
        assert_eq!(input.display_text(), "", "no committed value to restore");
    }

    #[test]
    fn test_toggle_meridiem_commits_and_stays_open() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args.use_12_hour(true).value("2:30 PM"))
            .expect("valid configuration");
        input.activate();
        assert!(input.toggle_meridiem());
        assert_eq!(committed.lock().as_slice(), ["2:30 AM"]);
        assert_eq!(input.display_text(), "2:30 AM");
        assert!(input.is_open(), "meridiem toggle keeps the dropdown open");
    }

    #[test]
    fn test_toggle_meridiem_requires_12_hour_mode() {
        let mut input = TimeInputController::new(TimeInputArgs::default().value("14:30"))
            .expect("valid configuration");
        input.activate();
        assert!(!input.toggle_meridiem());
        assert_eq!(input.display_text(), "14:30");
    }

    #[test]
    fn test_select_meridiem_same_half_is_a_no_op() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args.use_12_hour(true).value("2:30 PM"))
            .expect("valid configuration");
        input.activate();
        assert!(!input.select_meridiem(Meridiem::Pm));
        assert!(committed.lock().is_empty());
        assert!(input.select_meridiem(Meridiem::Am));
        assert_eq!(committed.lock().as_slice(), ["2:30 AM"]);
    }

    #[test]
    fn test_meridiem_toggle_rejected_by_bounds() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(
            args.use_12_hour(true)
                .min("09:00")
                .max("17:00")
                .value("10:00 AM"),
        )
        .expect("valid configuration");
        input.activate();
        assert!(!input.toggle_meridiem());
        assert_eq!(input.committed_text().as_deref(), Some("10:00 AM"));
        assert!(committed.lock().is_empty());
        assert!(input.is_open());
    }

    #[test]
    fn test_focus_field_tracks_active_subcontrol() {
        let mut input = TimeInputController::new(TimeInputArgs::default().show_seconds(true))
            .expect("valid configuration");
        input.focus_field(TimeField::Hours);
        assert_eq!(input.active_field(), None, "focus requires an open dropdown");
        input.activate();
        input.focus_field(TimeField::Minutes);
        assert_eq!(input.active_field(), Some(TimeField::Minutes));
        input.focus_field(TimeField::Seconds);
        assert_eq!(input.active_field(), Some(TimeField::Seconds));
    }

    #[test]
    fn test_focus_field_ignores_hidden_seconds() {
        let mut input =
            TimeInputController::new(TimeInputArgs::default()).expect("valid configuration");
        input.activate();
        input.focus_field(TimeField::Seconds);
        assert_eq!(input.active_field(), None);
    }

    #[test]
    fn test_set_disabled_closes_and_suppresses_events() {
        let mut input = TimeInputController::new(TimeInputArgs::default().value("14:30"))
            .expect("valid configuration");
        input.activate();
        input.set_disabled(true);
        assert!(!input.is_open());
        assert!(input.is_disabled());
        assert!(!input.edit_text("15:00"));
        assert_eq!(input.display_text(), "14:30", "disabled edits do not touch the buffer");
        input.set_disabled(false);
        input.activate();
        assert!(input.is_open());
    }

    #[test]
    fn test_set_value_syncs_without_notification() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args).expect("valid configuration");
        assert!(input.set_value("16:45"));
        assert_eq!(input.display_text(), "16:45");
        assert_eq!(input.value().map(|v| v.minute_of_day()), Some(1005));
        assert!(committed.lock().is_empty(), "owner pushes are not commits");

        assert!(!input.set_value("nonsense"));
        assert_eq!(input.display_text(), "");
        assert_eq!(input.value(), None);
    }

    #[test]
    fn test_set_value_bypasses_bounds_and_disabled_state() {
        let mut input = TimeInputController::new(
            TimeInputArgs::default().min("09:00").disabled(true),
        )
        .expect("valid configuration");
        assert!(input.set_value("08:00"));
        assert_eq!(input.committed_text().as_deref(), Some("08:00"));
    }

    #[test]
    fn test_initial_value_must_parse_under_the_mode() {
        let result = TimeInputController::new(TimeInputArgs::default().value("25:00"));
        assert!(matches!(
            result,
            Err(TimeInputConfigError::InvalidInitialValue { .. })
        ));

        let result =
            TimeInputController::new(TimeInputArgs::default().use_12_hour(true).value("14:30"));
        assert!(matches!(
            result,
            Err(TimeInputConfigError::InvalidInitialValue { .. })
        ));
    }

    #[test]
    fn test_notifications_follow_event_order() {
        let (args, committed) = recording_args();
        let mut input = TimeInputController::new(args).expect("valid configuration");
        input.edit_text("09:00");
        input.edit_text("9:99");
        input.edit_text("10:00");
        assert_eq!(committed.lock().as_slice(), ["09:00", "10:00"]);
    }

    #[test]
    fn test_day_options_follow_configuration() {
        let input = TimeInputController::new(
            TimeInputArgs::default().use_12_hour(true).minute_step(30),
        )
        .expect("valid configuration");
        let options = input.day_options();
        assert_eq!(options.len(), 48);
        assert_eq!(options.first().map(String::as_str), Some("12:00 AM"));
    }
}
