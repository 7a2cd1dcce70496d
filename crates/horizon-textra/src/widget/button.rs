//! Shared button behavior.
//!
//! [`ButtonCore`] owns the interaction flags and signals. The concrete
//! buttons embed it and refresh their image and label after each change.

use horizon_textra_core::Signal;
use horizon_textra_core::logging::targets;

use super::state::ButtonState;

/// State and signals common to every button.
pub struct ButtonCore {
    state: ButtonState,

    /// Whether `set_checked` emits `changed`.
    programmatic_change_events: bool,

    /// Emitted with the new value whenever the checked state flips.
    ///
    /// Programmatic changes only emit while programmatic change events are
    /// enabled; user clicks always emit.
    pub changed: Signal<bool>,

    /// Emitted after a click, with the checked state the click produced.
    pub clicked: Signal<bool>,
}

impl Default for ButtonCore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ButtonCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonCore")
            .field("state", &self.state)
            .field("programmatic_change_events", &self.programmatic_change_events)
            .finish_non_exhaustive()
    }
}

impl ButtonCore {
    pub fn new() -> Self {
        Self {
            state: ButtonState::new(),
            programmatic_change_events: true,
            changed: Signal::new(),
            clicked: Signal::new(),
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    // =========================================================================
    // Checked State
    // =========================================================================

    pub fn is_checked(&self) -> bool {
        self.state.checked
    }

    /// Set the checked state. Returns `false` if it was unchanged.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        self.apply_checked(checked, self.programmatic_change_events)
    }

    pub fn programmatic_change_events(&self) -> bool {
        self.programmatic_change_events
    }

    /// Whether `set_checked` notifies `changed` listeners.
    pub fn set_programmatic_change_events(&mut self, enabled: bool) {
        self.programmatic_change_events = enabled;
    }

    fn apply_checked(&mut self, checked: bool, notify: bool) -> bool {
        if self.state.checked == checked {
            return false;
        }
        self.state.checked = checked;
        tracing::trace!(target: targets::WIDGET, checked, notify, "button checked state changed");
        if notify {
            self.changed.emit(checked);
        }
        true
    }

    /// Toggle as a user click would. Disabled buttons ignore clicks.
    ///
    /// Returns `false` if the click was ignored.
    pub fn click(&mut self) -> bool {
        if self.state.disabled {
            tracing::trace!(target: targets::WIDGET, "click ignored on disabled button");
            return false;
        }
        self.apply_checked(!self.state.checked, true);
        self.clicked.emit(self.state.checked);
        true
    }

    // =========================================================================
    // Interaction Flags
    // =========================================================================

    pub fn is_disabled(&self) -> bool {
        self.state.disabled
    }

    /// Returns `false` if the flag was unchanged.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        replace(&mut self.state.disabled, disabled)
    }

    pub fn is_pressed(&self) -> bool {
        self.state.pressed
    }

    /// Returns `false` if the flag was unchanged.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        replace(&mut self.state.pressed, pressed)
    }

    pub fn is_over(&self) -> bool {
        self.state.over
    }

    /// Returns `false` if the flag was unchanged.
    pub fn set_over(&mut self, over: bool) -> bool {
        replace(&mut self.state.over, over)
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Returns `false` if the flag was unchanged.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        replace(&mut self.state.focused, focused)
    }
}

fn replace(flag: &mut bool, value: bool) -> bool {
    if *flag == value {
        return false;
    }
    *flag = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter(signal: &Signal<bool>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        signal.connect(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_set_checked_emits_once() {
        let mut core = ButtonCore::new();
        let changes = counter(&core.changed);
        assert!(core.set_checked(true));
        assert!(!core.set_checked(true));
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_programmatic_events_can_be_suppressed() {
        let mut core = ButtonCore::new();
        let changes = counter(&core.changed);
        core.set_programmatic_change_events(false);
        assert!(core.set_checked(true));
        assert_eq!(changes.load(Ordering::SeqCst), 0);

        // clicks still notify
        assert!(core.click());
        assert!(!core.is_checked());
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_click_ignored_when_disabled() {
        let mut core = ButtonCore::new();
        let clicks = counter(&core.clicked);
        core.set_disabled(true);
        assert!(!core.click());
        assert!(!core.is_checked());
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        core.set_disabled(false);
        assert!(core.click());
        assert!(core.is_checked());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_flags_report_changes() {
        let mut core = ButtonCore::new();
        assert!(core.set_over(true));
        assert!(!core.set_over(true));
        assert!(core.set_pressed(true));
        assert!(core.set_focused(true));
        assert_eq!(
            core.state(),
            ButtonState::new().with_over(true).with_pressed(true).with_focused(true)
        );
    }
}
