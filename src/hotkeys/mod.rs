//! Global hotkey handling
//!
//! Two thread-wide hotkeys (increase, decrease) feed a small time-windowed
//! state machine: a press of both within 500 ms is a restart gesture, any
//! other press is a directional brightness command.
//!
//! Registration is Windows-only; the debouncer is pure and cross-platform.

pub mod debouncer;
#[cfg(windows)]
pub mod manager;

pub use debouncer::{HotkeyAction, InputDebouncer, PAIR_WINDOW};
#[cfg(windows)]
pub use manager::HotkeyRegistration;

use crate::brightness::StepDirection;

/// Logical identity of a hotkey press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyId {
    /// The "brighter" hotkey
    Increase,
    /// The "darker" hotkey
    Decrease,
}

impl HotkeyId {
    /// The step direction this hotkey commands when it is not half of a
    /// restart gesture.
    pub fn direction(self) -> StepDirection {
        match self {
            HotkeyId::Increase => StepDirection::Up,
            HotkeyId::Decrease => StepDirection::Down,
        }
    }

    /// The opposite hotkey.
    pub fn other(self) -> Self {
        match self {
            HotkeyId::Increase => HotkeyId::Decrease,
            HotkeyId::Decrease => HotkeyId::Increase,
        }
    }
}
