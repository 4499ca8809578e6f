//! Shared handle for driving one controller from UI closures.
use std::sync::Arc;

use clockpick_core::{Meridiem, TimeField};
use parking_lot::RwLock;

use crate::{
    config::{TimeInputArgs, TimeInputConfigError},
    controller::TimeInputController,
    snapshot::TimeInputSnapshot,
};

/// Cloneable handle sharing one [`TimeInputController`].
///
/// Presentation layers register `'static` closures for clicks, focus
/// changes, and key input; each closure captures a clone of the handle and
/// forwards its event. The lock is uncontended in the single-threaded event
/// model and exists so those closures can be `Send + Sync`.
///
/// Commit notifications are emitted after the internal guard is released,
/// so an `on_commit` callback may query or drive the handle it came from.
#[derive(Clone)]
pub struct TimeInputHandle {
    inner: Arc<RwLock<TimeInputController>>,
}

impl TimeInputHandle {
    /// Validates `args` and wraps a new controller.
    pub fn new(args: TimeInputArgs) -> Result<Self, TimeInputConfigError> {
        Ok(Self::from_controller(TimeInputController::new(args)?))
    }

    /// Wraps an existing controller.
    pub fn from_controller(controller: TimeInputController) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    /// Runs `f` with shared access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&TimeInputController) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the controller.
    ///
    /// Events driven inside `f` emit their notifications while the guard is
    /// held; use the forwarding methods when the commit callback needs to
    /// call back into this handle.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut TimeInputController) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Opens the dropdown.
    pub fn activate(&self) {
        self.inner.write().activate();
    }

    /// Flips the dropdown between open and closed.
    pub fn toggle_open(&self) {
        self.inner.write().toggle_open();
    }

    /// Closes the dropdown after an interaction outside the widget.
    pub fn outside_interaction(&self) {
        self.inner.write().outside_interaction();
    }

    /// Selects a dropdown option. Returns whether a commit happened.
    pub fn select_option(&self, field: TimeField, value: u8) -> bool {
        self.forward_commit(|input| input.select_option_inner(field, value))
    }

    /// Selects a meridiem. Returns whether a commit happened.
    pub fn select_meridiem(&self, meridiem: Meridiem) -> bool {
        self.forward_commit(|input| input.select_meridiem_inner(meridiem))
    }

    /// Flips AM/PM. Returns whether a commit happened.
    pub fn toggle_meridiem(&self) -> bool {
        self.forward_commit(|input| input.toggle_meridiem_inner())
    }

    /// Replaces the text buffer. Returns whether a commit happened.
    pub fn edit_text(&self, raw: impl Into<String>) -> bool {
        self.forward_commit(|input| input.edit_text_inner(raw))
    }

    /// Resynchronizes the buffer with the committed value.
    pub fn blur(&self) {
        self.inner.write().blur();
    }

    /// Marks a sub-control as active.
    pub fn focus_field(&self, field: TimeField) {
        self.inner.write().focus_field(field);
    }

    /// Enables or disables the widget.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.write().set_disabled(disabled);
    }

    /// Replaces the committed value without a commit notification.
    pub fn set_value(&self, text: &str) -> bool {
        self.inner.write().set_value(text)
    }

    /// Returns whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.inner.read().is_open()
    }

    /// Captures the current render state.
    pub fn snapshot(&self) -> TimeInputSnapshot {
        self.inner.read().snapshot()
    }

    // The guard must drop before the callback runs so it can take the lock
    // again.
    fn forward_commit(
        &self,
        event: impl FnOnce(&mut TimeInputController) -> Option<String>,
    ) -> bool {
        let (text, on_commit) = {
            let mut inner = self.inner.write();
            (event(&mut inner), inner.commit_callback())
        };
        match text {
            Some(text) => {
                if let Some(on_commit) = on_commit {
                    on_commit(&text);
                }
                true
            }
            None => false,
        }
    }
}
