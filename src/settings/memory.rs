//! In-memory settings store
//!
//! Backs the unit and integration tests, and non-Windows builds of the
//! library where there is no registry. Holds the pair behind a mutex so the
//! store can be shared and written through `&self` like the registry store.

use parking_lot::Mutex;

use super::{Settings, SettingsStore};
use crate::error::Result;

/// Volatile `SettingsStore` holding the pair in process memory.
#[derive(Debug, Default)]
pub struct MemorySettings {
    inner: Mutex<Settings>,
}

impl MemorySettings {
    /// Create a store seeded with the given pair.
    pub fn with(settings: Settings) -> Self {
        Self {
            inner: Mutex::new(settings),
        }
    }
}

impl SettingsStore for MemorySettings {
    fn read(&self) -> Settings {
        *self.inner.lock()
    }

    fn write(&self, settings: &Settings) -> Result<()> {
        *self.inner.lock() = *settings;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brightness::RangeMode;
    use crate::settings::DEFAULT_BRIGHTNESS;

    #[test]
    fn test_defaults() {
        let store = MemorySettings::default();
        let settings = store.read();
        assert!((settings.brightness - DEFAULT_BRIGHTNESS).abs() < f64::EPSILON);
        assert_eq!(settings.range_mode, RangeMode::Normal);
    }

    #[test]
    fn test_write_read_round_trip() {
        let store = MemorySettings::default();
        let written = Settings {
            brightness: 4.5,
            range_mode: RangeMode::Extended,
        };
        store.write(&written).unwrap();
        assert_eq!(store.read(), written);
    }
}
