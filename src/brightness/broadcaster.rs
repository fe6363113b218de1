//! Broadcast-and-persist
//!
//! Applies one boost level to every active display, then commits it to the
//! settings store. The persist is coupled to the apply because the last
//! successful write is the application's only signal of "current
//! brightness": an apply that is not also persisted would desynchronize
//! state from reality on the next read.
//!
//! Physical monitor state has no transactional rollback, so the operation is
//! best-effort: a display that fails mid-broadcast does not stop the rest,
//! the intended target is persisted anyway, and the overall result reports
//! the partial failure.

use tracing::{debug, warn};

use crate::error::{BrightnessTrayError, Result};
use crate::native::BoostApi;
use crate::settings::{Settings, SettingsStore};

/// One-shot broadcast of a boost level to all displays.
///
/// Borrowed per operation; holds no state between applies so display
/// enumeration is always fresh.
pub struct MonitorBroadcaster<'a, S: SettingsStore, A: BoostApi> {
    store: &'a S,
    api: &'a A,
}

impl<'a, S: SettingsStore, A: BoostApi> MonitorBroadcaster<'a, S, A> {
    /// Create a broadcaster over the given store and native capability.
    pub fn new(store: &'a S, api: &'a A) -> Self {
        Self { store, api }
    }

    /// Apply `value` to every active display and persist it.
    ///
    /// Aborts before touching any display when the native capability cannot
    /// be resolved or enumeration yields nothing. Per-display failures do
    /// not roll anything back; the intended target is persisted and a
    /// `PartialApply` error reports the shortfall. A persist failure after a
    /// successful apply is logged and swallowed - the displays already show
    /// the new value.
    pub fn apply(&self, value: f64) -> Result<()> {
        self.api.available()?;

        let displays = self.api.displays()?;
        if displays.is_empty() {
            return Err(BrightnessTrayError::NoDisplaysFound);
        }

        let total = displays.len();
        let mut applied = 0usize;
        for handle in &displays {
            match self.api.apply(handle, value) {
                Ok(()) => applied += 1,
                Err(e) => warn!("failed to apply brightness {value} to {handle:?}: {e}"),
            }
        }
        debug!("applied brightness {value} to {applied} of {total} displays");

        // Persist the intended target even when some displays failed: the
        // next operation must step from what the user asked for, not from a
        // value that no longer matches any display.
        let range_mode = self.store.read().range_mode;
        if let Err(e) = self.store.write(&Settings {
            brightness: value,
            range_mode,
        }) {
            warn!("brightness {value} applied but not persisted: {e}");
        }

        if applied == total {
            Ok(())
        } else {
            Err(BrightnessTrayError::PartialApply { applied, total })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::RangeMode;
    use crate::test_utils::FakeBoostApi;
    use crate::settings::MemorySettings;

    #[test]
    fn test_applies_to_every_display_and_persists() {
        let store = MemorySettings::default();
        let api = FakeBoostApi::with_displays(3);

        MonitorBroadcaster::new(&store, &api).apply(4.5).unwrap();

        assert_eq!(api.applied(), vec![4.5, 4.5, 4.5]);
        assert!((store.read().brightness - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_persist_keeps_current_range_mode() {
        let store = MemorySettings::with(Settings {
            brightness: 3.0,
            range_mode: RangeMode::Extended,
        });
        let api = FakeBoostApi::with_displays(1);

        MonitorBroadcaster::new(&store, &api).apply(7.0).unwrap();

        assert_eq!(store.read().range_mode, RangeMode::Extended);
    }

    #[test]
    fn test_unavailable_capability_aborts_before_displays() {
        let store = MemorySettings::default();
        let api = FakeBoostApi::unavailable();

        let err = MonitorBroadcaster::new(&store, &api).apply(4.0).unwrap_err();

        assert!(matches!(err, BrightnessTrayError::BoostApiUnavailable(_)));
        assert!(api.applied().is_empty());
        // Nothing persisted either
        assert!((store.read().brightness - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_displays_aborts() {
        let store = MemorySettings::default();
        let api = FakeBoostApi::with_displays(0);

        let err = MonitorBroadcaster::new(&store, &api).apply(4.0).unwrap_err();

        assert!(matches!(err, BrightnessTrayError::NoDisplaysFound));
        assert!((store.read().brightness - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_failure_persists_target_and_reports() {
        let store = MemorySettings::default();
        let api = FakeBoostApi::with_displays(3).failing_on(1);

        let err = MonitorBroadcaster::new(&store, &api).apply(5.0).unwrap_err();

        assert!(matches!(
            err,
            BrightnessTrayError::PartialApply {
                applied: 2,
                total: 3
            }
        ));
        // Remaining displays were still attempted, no rollback
        assert_eq!(api.applied(), vec![5.0, 5.0]);
        // Persisted value reflects the intended target
        assert!((store.read().brightness - 5.0).abs() < f64::EPSILON);
    }
}
