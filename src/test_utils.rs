#![expect(clippy::unwrap_used, reason = "Test utilities use .unwrap() for brevity")]

//! Shared test utilities for `BrightnessTray` unit tests.
//!
//! Only compiled during testing (`#[cfg(test)]`). The in-memory settings
//! store lives in `settings::memory` because non-Windows library builds use
//! it too; the fake native capability is test-only and lives here.

use parking_lot::Mutex;

use crate::error::{BrightnessTrayError, Result};
use crate::native::{BoostApi, DisplayHandle};

/// Scriptable `BoostApi` fake recording every apply call.
pub struct FakeBoostApi {
    displays: Vec<DisplayHandle>,
    available: bool,
    fail_on: Option<usize>,
    applied: Mutex<Vec<f64>>,
}

impl FakeBoostApi {
    /// Fake with `count` displays, all applies succeeding.
    pub fn with_displays(count: usize) -> Self {
        Self {
            displays: (0..count)
                .map(|i| DisplayHandle::from_raw(i as isize + 1))
                .collect(),
            available: true,
            fail_on: None,
            applied: Mutex::new(Vec::new()),
        }
    }

    /// Fake whose capability cannot be resolved at all.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::with_displays(0)
        }
    }

    /// Make the apply to the display at `index` fail.
    pub fn failing_on(mut self, index: usize) -> Self {
        self.fail_on = Some(index);
        self
    }

    /// Boost levels that reached a display, in call order.
    pub fn applied(&self) -> Vec<f64> {
        self.applied.lock().clone()
    }
}

impl BoostApi for FakeBoostApi {
    fn available(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(BrightnessTrayError::BoostApiUnavailable(
                "fake capability disabled".to_string(),
            ))
        }
    }

    fn displays(&self) -> Result<Vec<DisplayHandle>> {
        Ok(self.displays.clone())
    }

    fn apply(&self, display: &DisplayHandle, level: f64) -> Result<()> {
        let index = self
            .displays
            .iter()
            .position(|d| d == display)
            .unwrap();
        if self.fail_on == Some(index) {
            return Err(BrightnessTrayError::BoostApiUnavailable(format!(
                "fake failure on display {index}"
            )));
        }
        self.applied.lock().push(level);
        Ok(())
    }
}
