//! Registry-backed settings store
//!
//! Persists the pair as two string values under
//! `HKCU\Software\BrightnessTrayApp`:
//!
//! | value | default | notes |
//! |---|---|---|
//! | `Brightness` | "3.0" | invariant-culture float; unparsable -> default |
//! | `RangeMode` | "normal" | only "extended" selects the extended range |
//!
//! The subkey is opened fresh on every read and write so concurrent
//! command-line invocations always see the latest pair (last-writer-wins).

use tracing::warn;
use winreg::RegKey;
use winreg::enums::HKEY_CURRENT_USER;

use super::{DEFAULT_BRIGHTNESS, Settings, SettingsStore};
use crate::brightness::RangeMode;
use crate::error::{BrightnessTrayError, Result};

/// Registry subkey holding the persisted pair
const SETTINGS_SUBKEY: &str = "Software\\BrightnessTrayApp";

/// Value name for the brightness level
const BRIGHTNESS_VALUE: &str = "Brightness";

/// Value name for the range mode tag
const RANGE_MODE_VALUE: &str = "RangeMode";

/// `SettingsStore` over the current user's registry hive.
///
/// Holds no open handle; each operation opens the subkey anew.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistrySettings;

impl RegistrySettings {
    /// Create a registry-backed store.
    pub fn new() -> Self {
        Self
    }
}

impl SettingsStore for RegistrySettings {
    fn read(&self) -> Settings {
        let Ok(key) = RegKey::predef(HKEY_CURRENT_USER).open_subkey(SETTINGS_SUBKEY) else {
            // First run, or the key was removed out-of-band
            return Settings::default();
        };

        let brightness = key
            .get_value::<String, _>(BRIGHTNESS_VALUE)
            .ok()
            .and_then(|raw| raw.parse::<f64>().ok())
            .unwrap_or_else(|| {
                warn!("persisted brightness missing or unparsable, using default");
                DEFAULT_BRIGHTNESS
            });

        let range_mode = key
            .get_value::<String, _>(RANGE_MODE_VALUE)
            .map(|raw| RangeMode::from_persisted(&raw))
            .unwrap_or_default();

        Settings {
            brightness,
            range_mode,
        }
    }

    fn write(&self, settings: &Settings) -> Result<()> {
        let (key, _) = RegKey::predef(HKEY_CURRENT_USER)
            .create_subkey(SETTINGS_SUBKEY)
            .map_err(BrightnessTrayError::SettingsWrite)?;

        key.set_value(BRIGHTNESS_VALUE, &settings.brightness.to_string())
            .map_err(BrightnessTrayError::SettingsWrite)?;
        key.set_value(RANGE_MODE_VALUE, &settings.range_mode.as_str().to_string())
            .map_err(BrightnessTrayError::SettingsWrite)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Touches the real HKCU hive; the subkey is the app's own namespace so
    // a round-trip through it is safe on a developer machine.
    #[test]
    fn test_registry_round_trip() {
        let store = RegistrySettings::new();
        let original = store.read();

        let written = Settings {
            brightness: 4.5,
            range_mode: RangeMode::Extended,
        };
        store.write(&written).unwrap();
        assert_eq!(store.read(), written);

        store.write(&original).unwrap();
    }

    #[test]
    fn test_unparsable_brightness_falls_back() {
        let (key, _) = RegKey::predef(HKEY_CURRENT_USER)
            .create_subkey(SETTINGS_SUBKEY)
            .unwrap();
        let original: Option<String> = key.get_value(BRIGHTNESS_VALUE).ok();

        key.set_value(BRIGHTNESS_VALUE, &"not a number".to_string())
            .unwrap();
        let settings = RegistrySettings::new().read();
        assert!((settings.brightness - DEFAULT_BRIGHTNESS).abs() < f64::EPSILON);

        match original {
            Some(value) => key.set_value(BRIGHTNESS_VALUE, &value).unwrap(),
            None => {
                let _ = key.delete_value(BRIGHTNESS_VALUE);
            }
        }
    }
}
