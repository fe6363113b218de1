//! Auto-start registry management
//!
//! Registers the executable under the current user's Run key so the tray
//! starts at login. The stored command is the bare executable path; the
//! tray is the default mode, so no arguments are needed.

use crate::error::Result;

/// Manages the "run at login" registry entry.
pub struct AutoStartManager;

#[cfg(windows)]
mod windows_impl {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    use super::{AutoStartManager, Result};

    /// Run key under the current user's hive
    const RUN_SUBKEY: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Run";

    /// Value name identifying this application
    const RUN_VALUE: &str = "BrightnessTray";

    impl AutoStartManager {
        /// Check whether the Run entry is present.
        pub fn is_enabled() -> Result<bool> {
            let key = RegKey::predef(HKEY_CURRENT_USER).open_subkey(RUN_SUBKEY)?;
            Ok(key.get_value::<String, _>(RUN_VALUE).is_ok())
        }

        /// Register the current executable for launch at login.
        pub fn enable() -> Result<()> {
            let exe = std::env::current_exe()?;
            let (key, _) = RegKey::predef(HKEY_CURRENT_USER).create_subkey(RUN_SUBKEY)?;
            key.set_value(RUN_VALUE, &exe.to_string_lossy().to_string())?;
            tracing::info!("auto-start enabled");
            Ok(())
        }

        /// Remove the Run entry if present.
        pub fn disable() -> Result<()> {
            // create_subkey opens writable; a read-only open cannot delete
            let (key, _) = RegKey::predef(HKEY_CURRENT_USER).create_subkey(RUN_SUBKEY)?;
            match key.delete_value(RUN_VALUE) {
                Ok(()) => {
                    tracing::info!("auto-start disabled");
                    Ok(())
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(not(windows))]
impl AutoStartManager {
    /// Stub: auto-start is a Windows concept.
    pub fn is_enabled() -> Result<bool> {
        Ok(false)
    }

    /// Stub: auto-start is a Windows concept.
    pub fn enable() -> Result<()> {
        Ok(())
    }

    /// Stub: auto-start is a Windows concept.
    pub fn disable() -> Result<()> {
        Ok(())
    }
}

#[cfg(all(test, windows))]
mod tests {
    use super::*;

    // Round-trips the real Run key; the value name is this app's own.
    #[test]
    fn test_enable_disable_round_trip() {
        let originally_enabled = AutoStartManager::is_enabled().unwrap_or(false);

        AutoStartManager::enable().unwrap();
        assert!(AutoStartManager::is_enabled().unwrap());

        AutoStartManager::disable().unwrap();
        assert!(!AutoStartManager::is_enabled().unwrap());

        if originally_enabled {
            AutoStartManager::enable().unwrap();
        }
    }

    #[test]
    fn test_disable_when_absent_is_ok() {
        let originally_enabled = AutoStartManager::is_enabled().unwrap_or(false);
        AutoStartManager::disable().unwrap();
        assert!(AutoStartManager::disable().is_ok());
        if originally_enabled {
            AutoStartManager::enable().unwrap();
        }
    }
}
