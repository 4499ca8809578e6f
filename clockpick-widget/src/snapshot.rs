//! Render state captured from the controller.
use clockpick_core::{Meridiem, TimeField};

/// Point-in-time render state for the presentation layer.
///
/// Captured on demand by
/// [`TimeInputController::snapshot`](crate::controller::TimeInputController::snapshot);
/// it holds no references into the controller and can be compared across
/// frames to skip redraws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInputSnapshot {
    /// Text currently in the input field, possibly mid-edit.
    pub display_text: String,
    /// Text to fall back to while no value is committed.
    pub placeholder: String,
    /// Whether the dropdown is open.
    pub is_open: bool,
    /// Whether the widget ignores input.
    pub disabled: bool,
    /// Sub-control that should render highlighted.
    pub active_field: Option<TimeField>,
    /// Hour options for the dropdown column, in display form.
    pub hour_options: Vec<u8>,
    /// Minute options at the configured step.
    pub minute_options: Vec<u8>,
    /// Second options at the configured step, empty when seconds are hidden.
    pub second_options: Vec<u8>,
    /// Committed hour in display form, for option highlighting.
    pub selected_hour: Option<u8>,
    /// Committed minute, present only when it lies on the step grid.
    pub selected_minute: Option<u8>,
    /// Committed second, present only when it lies on the step grid.
    pub selected_second: Option<u8>,
    /// Meridiem of the committed value in 12-hour mode.
    pub meridiem: Option<Meridiem>,
    /// Whether meridiem controls should render.
    pub shows_meridiem: bool,
}

impl TimeInputSnapshot {
    /// Text to render in the field, falling back to the placeholder while
    /// the buffer is empty.
    pub fn effective_display(&self) -> &str {
        if self.display_text.is_empty() {
            &self.placeholder
        } else {
            &self.display_text
        }
    }
}
