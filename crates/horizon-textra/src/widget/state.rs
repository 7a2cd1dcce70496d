//! Button interaction state.

/// The flags every style lookup reads.
///
/// `over` is pointer hover; `pressed` is the visual pressed state while a
/// pointer or key holds the button down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonState {
    pub disabled: bool,
    pub pressed: bool,
    pub checked: bool,
    pub over: bool,
    pub focused: bool,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            disabled: false,
            pressed: false,
            checked: false,
            over: false,
            focused: false,
        }
    }

    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub const fn with_pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub const fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub const fn with_over(mut self, over: bool) -> Self {
        self.over = over;
        self
    }

    pub const fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}
