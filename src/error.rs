//! Error types for `BrightnessTray`
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Settings *reads* never produce an error: the store falls back to defaults,
//! because brightness control is best-effort and must never crash a caller.
//! Everything listed here is non-fatal to the process - callers report the
//! failure and keep running.

use thiserror::Error;

/// Main error type for `BrightnessTray` operations
#[derive(Debug, Error)]
pub enum BrightnessTrayError {
    /// The compositor brightness-boost entry point could not be resolved
    #[error("brightness boost API unavailable: {0}")]
    BoostApiUnavailable(String),

    /// Display enumeration returned no active displays
    #[error("no active displays found")]
    NoDisplaysFound,

    /// Some displays were updated but at least one apply call failed.
    /// The persisted value reflects the intended target, not necessarily
    /// what every display currently shows.
    #[error("brightness applied to {applied} of {total} displays")]
    PartialApply {
        /// Number of displays the boost level reached
        applied: usize,
        /// Number of displays enumerated
        total: usize,
    },

    /// The durable settings store rejected a write
    #[error("failed to persist settings: {0}")]
    SettingsWrite(#[source] std::io::Error),

    /// A global hotkey could not be registered
    #[error("failed to register hotkey: {0}")]
    HotkeyRegistration(String),

    /// Another tray instance already holds the single-instance mutex
    #[error("another instance of BrightnessTray is already running")]
    AlreadyRunning,

    /// Tray icon or menu construction failed
    #[error("tray error: {0}")]
    Tray(String),

    /// Windows API error
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `BrightnessTray` operations
pub type Result<T> = std::result::Result<T, BrightnessTrayError>;

/// Convert an error to a message suitable for an end-user dialog.
///
/// Only the failures a user can act on get troubleshooting hints; the rest
/// fall back to the error's `Display` text.
pub fn get_user_friendly_error(error: &BrightnessTrayError) -> String {
    match error {
        BrightnessTrayError::BoostApiUnavailable(_) => {
            "The display compositor does not expose the brightness boost API.\n\n\
             Please ensure:\n\
             - You are running Windows 10/11 with HDR enabled\n\
             - Your graphics drivers are up to date"
                .to_string()
        }
        BrightnessTrayError::NoDisplaysFound => "No active displays were found.\n\n\
             Brightness cannot be changed until a display is connected."
            .to_string(),
        BrightnessTrayError::SettingsWrite(_) => "Failed to save settings.\n\n\
             The new brightness was applied but will not be restored after a\n\
             restart. Check that the current user can write to:\n\
             HKCU\\Software\\BrightnessTrayApp"
            .to_string(),
        BrightnessTrayError::AlreadyRunning => {
            "Another instance of BrightnessTray is already running.\n\n\
             Check the system tray for the BrightnessTray icon."
                .to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = BrightnessTrayError::NoDisplaysFound;
        assert_eq!(error.to_string(), "no active displays found");
    }

    #[test]
    fn test_partial_apply_display() {
        let error = BrightnessTrayError::PartialApply {
            applied: 1,
            total: 3,
        };
        assert_eq!(error.to_string(), "brightness applied to 1 of 3 displays");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: BrightnessTrayError = io_error.into();
        assert!(matches!(error, BrightnessTrayError::Io(_)));
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = BrightnessTrayError::BoostApiUnavailable("ordinal missing".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("brightness boost API"));
        assert!(message.contains("HDR enabled"));
    }

    #[test]
    fn test_user_friendly_fallback() {
        let error = BrightnessTrayError::HotkeyRegistration("id 1".to_string());
        assert_eq!(
            get_user_friendly_error(&error),
            "failed to register hotkey: id 1"
        );
    }
}
