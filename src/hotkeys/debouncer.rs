//! Dual-press disambiguation
//!
//! Turns the two independent hotkey event streams into either a directional
//! brightness command or a combined-restart signal. Two slots, last-write-
//! wins: only the most recent press per id matters for pairing, so there is
//! no queue and no expiry sweep - a stale timestamp is simply overwritten by
//! the next press.

use std::time::{Duration, Instant};

use super::HotkeyId;
use crate::brightness::StepDirection;

/// Presses of both hotkeys within this window form a restart gesture
pub const PAIR_WINDOW: Duration = Duration::from_millis(500);

/// What a hotkey press resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// An ordinary directional brightness command
    Step(StepDirection),
    /// Both hotkeys fired within the pairing window
    Restart,
}

/// Two-slot, time-windowed press pairing state machine.
#[derive(Debug, Default)]
pub struct InputDebouncer {
    last_increase: Option<Instant>,
    last_decrease: Option<Instant>,
}

impl InputDebouncer {
    /// Create a debouncer with no recorded presses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one press and resolve it.
    ///
    /// A press whose opposite fired less than [`PAIR_WINDOW`] ago resolves
    /// to [`HotkeyAction::Restart`] and consumes both recorded presses - a
    /// third press afterwards starts fresh. Anything else resolves to the
    /// press's directional command and stays recorded for future pairing.
    pub fn observe(&mut self, id: HotkeyId, at: Instant) -> HotkeyAction {
        match id {
            HotkeyId::Increase => self.last_increase = Some(at),
            HotkeyId::Decrease => self.last_decrease = Some(at),
        }

        let other = match id.other() {
            HotkeyId::Increase => self.last_increase,
            HotkeyId::Decrease => self.last_decrease,
        };

        if let Some(other_at) = other
            && at.saturating_duration_since(other_at) < PAIR_WINDOW
        {
            self.last_increase = None;
            self.last_decrease = None;
            return HotkeyAction::Restart;
        }

        HotkeyAction::Step(id.direction())
    }
}
