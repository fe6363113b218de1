//! Brightness operation controller
//!
//! Coordinates settings reads, stepping, and the broadcast-and-persist
//! operation. Every operation starts with a fresh read of the persisted
//! pair - the ceiling is always derived from durable state, never from a
//! value remembered across operations. (The OS slider or another process
//! instance could have rewritten the pair between calls; the store's own
//! last write is the only visible truth.)

use tracing::info;

use crate::brightness::{
    CEILING_EXTENDED, CEILING_NORMAL, MIN_BRIGHTNESS, MonitorBroadcaster, RangeMode,
    StepDirection, step,
};
use crate::error::Result;
use crate::native::BoostApi;
use crate::settings::{Settings, SettingsStore};

/// Result of a step operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The new level was applied to the displays and persisted.
    Applied(f64),
    /// Already at the boundary in the requested direction; nothing was
    /// applied or persisted. Carries the unchanged level for reporting.
    AtBoundary(f64),
}

/// Coordinator for all brightness operations.
pub struct BrightnessController<S: SettingsStore, A: BoostApi> {
    store: S,
    api: A,
}

impl<S: SettingsStore, A: BoostApi> BrightnessController<S, A> {
    /// Create a controller over the given store and native capability.
    pub fn new(store: S, api: A) -> Self {
        Self { store, api }
    }

    /// Step against the persisted mode's ceiling.
    pub fn step(&self, direction: StepDirection) -> Result<StepOutcome> {
        let settings = self.store.read();
        self.step_against(direction, settings.range_mode.ceiling(), settings.brightness)
    }

    /// Step against the extended ceiling regardless of the persisted mode.
    ///
    /// The transient override used by the command line's forced-extended
    /// increase: the value is computed against 12.0 while the persisted
    /// mode field stays whatever it already was.
    pub fn step_forced_extended(&self, direction: StepDirection) -> Result<StepOutcome> {
        let settings = self.store.read();
        self.step_against(direction, CEILING_EXTENDED, settings.brightness)
    }

    fn step_against(
        &self,
        direction: StepDirection,
        ceiling: f64,
        current: f64,
    ) -> Result<StepOutcome> {
        match step(current, direction, ceiling) {
            Some(next) => {
                self.broadcast(next)?;
                info!("brightness stepped {direction:?} from {current} to {next}");
                Ok(StepOutcome::Applied(next))
            }
            None => Ok(StepOutcome::AtBoundary(current)),
        }
    }

    /// Apply an absolute level, clamped to the fixed `[1.0, 6.0]` range.
    pub fn set(&self, value: f64) -> Result<f64> {
        let clamped = value.clamp(MIN_BRIGHTNESS, CEILING_NORMAL);
        self.broadcast(clamped)?;
        Ok(clamped)
    }

    /// Apply an absolute level verbatim, no clamping or quantization.
    ///
    /// Off-grid values entered here snap back onto the half-step grid on
    /// the next directional step.
    pub fn set_unclamped(&self, value: f64) -> Result<f64> {
        self.broadcast(value)?;
        Ok(value)
    }

    /// Switch range mode, clamping brightness down to the new ceiling.
    ///
    /// The clamped pair is persisted first; when the clamp actually lowered
    /// the value the displays are brought down with it. Returns the
    /// brightness now in effect.
    pub fn set_range_mode(&self, mode: RangeMode) -> Result<f64> {
        let settings = self.store.read();
        let brightness = settings.brightness.min(mode.ceiling());

        self.store.write(&Settings {
            brightness,
            range_mode: mode,
        })?;
        info!("range mode set to {mode:?}, brightness {brightness}");

        if brightness < settings.brightness {
            self.broadcast(brightness)?;
        }
        Ok(brightness)
    }

    /// Re-apply the persisted level to all displays (startup restore).
    pub fn restore(&self) -> Result<f64> {
        let settings = self.store.read();
        self.broadcast(settings.brightness)?;
        Ok(settings.brightness)
    }

    /// Fresh read of the persisted pair, for display purposes.
    pub fn current(&self) -> Settings {
        self.store.read()
    }

    fn broadcast(&self, value: f64) -> Result<()> {
        MonitorBroadcaster::new(&self.store, &self.api).apply(value)
    }
}
