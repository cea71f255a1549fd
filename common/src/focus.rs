//! Focus state machine for a display.
//!
//! A display is either [`FocusState::Unfocused`] or [`FocusState::Focused`].
//! Only a focused display accepts digit entry.
//!
//! # Transitions
//!
//! | From        | Trigger                              | To          | Effect  |
//! |-------------|--------------------------------------|-------------|---------|
//! | any         | `ContainerClick`, `Focus`            | `Focused`   | `Enter` |
//! | `Focused`   | `OutsideClick`, `EscapeKey`, `Blur`  | `Unfocused` | `Leave` |
//! | `Unfocused` | `OutsideClick`, `EscapeKey`, `Blur`  | `Unfocused` | none    |
//!
//! `Enter` applies the focus marker and resets the value to `"000"`, even when
//! the display was already focused. `Leave` removes the marker and keeps the
//! value.

/// Interaction state of a display.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum FocusState {
    /// Keys are ignored. Initial state.
    #[default]
    Unfocused,

    /// Digit keys edit the value, Escape leaves focus.
    Focused,
}

/// Event that may change the focus state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusTrigger {
    /// Click landing inside the display's container.
    ContainerClick,
    /// Click landing anywhere else, including another display.
    OutsideClick,
    /// Escape pressed while keys reach the display.
    EscapeKey,
    /// Programmatic focus.
    Focus,
    /// Programmatic blur.
    Blur,
}

/// Side effect the display applies after a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusEffect {
    /// Show the focus marker and reset the value.
    Enter,
    /// Hide the focus marker.
    Leave,
}

impl FocusState {
    /// Apply a trigger, returning the next state and the effect to run.
    #[inline]
    pub const fn on(
        self,
        trigger: FocusTrigger,
    ) -> (Self, Option<FocusEffect>) {
        match (self, trigger) {
            (_, FocusTrigger::ContainerClick | FocusTrigger::Focus) => (Self::Focused, Some(FocusEffect::Enter)),
            (Self::Focused, FocusTrigger::OutsideClick | FocusTrigger::EscapeKey | FocusTrigger::Blur) => {
                (Self::Unfocused, Some(FocusEffect::Leave))
            }
            (Self::Unfocused, FocusTrigger::OutsideClick | FocusTrigger::EscapeKey | FocusTrigger::Blur) => {
                (Self::Unfocused, None)
            }
        }
    }

    /// Whether the focus marker is shown.
    #[inline]
    pub const fn is_focused(self) -> bool { matches!(self, Self::Focused) }

    /// Whether key presses are delivered to the value.
    #[inline]
    pub const fn accepts_keys(self) -> bool { self.is_focused() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_TRIGGERS: [FocusTrigger; 3] = [FocusTrigger::OutsideClick, FocusTrigger::EscapeKey, FocusTrigger::Blur];

    #[test]
    fn test_default_is_unfocused() {
        assert_eq!(FocusState::default(), FocusState::Unfocused);
        assert!(!FocusState::default().accepts_keys());
    }

    #[test]
    fn test_container_click_enters_focus() {
        let (state, effect) = FocusState::Unfocused.on(FocusTrigger::ContainerClick);
        assert_eq!(state, FocusState::Focused);
        assert_eq!(effect, Some(FocusEffect::Enter));
        assert!(state.accepts_keys());
    }

    #[test]
    fn test_refocus_runs_enter_again() {
        // Clicking a focused display resets its value again
        for trigger in [FocusTrigger::ContainerClick, FocusTrigger::Focus] {
            let (state, effect) = FocusState::Focused.on(trigger);
            assert_eq!(state, FocusState::Focused);
            assert_eq!(effect, Some(FocusEffect::Enter), "{trigger:?} should re-enter focus");
        }
    }

    #[test]
    fn test_leave_triggers_from_focused() {
        for trigger in LEAVE_TRIGGERS {
            let (state, effect) = FocusState::Focused.on(trigger);
            assert_eq!(state, FocusState::Unfocused, "{trigger:?} should leave focus");
            assert_eq!(effect, Some(FocusEffect::Leave));
        }
    }

    #[test]
    fn test_leave_triggers_from_unfocused_are_noops() {
        for trigger in LEAVE_TRIGGERS {
            let (state, effect) = FocusState::Unfocused.on(trigger);
            assert_eq!(state, FocusState::Unfocused);
            assert_eq!(effect, None, "{trigger:?} should not produce an effect");
        }
    }
}
