//! Single instance enforcement
//!
//! Ensures only one tray instance runs at a time using a Windows named
//! mutex. Command-line invocations deliberately bypass this guard: they are
//! one-shot processes that may run while the tray is up, with
//! last-writer-wins semantics on the persisted settings.

use crate::error::Result;

#[cfg(windows)]
use crate::error::BrightnessTrayError;

#[cfg(windows)]
use windows::Win32::Foundation::{CloseHandle, HANDLE};
#[cfg(windows)]
use windows::Win32::System::Threading::{CreateMutexW, OpenMutexW, SYNCHRONIZATION_SYNCHRONIZE};

/// Single instance guard using a Windows named mutex (released on drop).
///
/// The restart path relies on the release-on-drop behavior: the old process
/// must drop its guard before spawning its replacement, or the replacement's
/// own instance check would fail against the dying parent.
#[cfg(windows)]
pub struct SingleInstanceGuard {
    mutex_handle: HANDLE,
}

#[cfg(windows)]
impl SingleInstanceGuard {
    /// Acquire the guard, failing if another tray instance is running.
    #[expect(unsafe_code, reason = "Windows FFI for the named mutex")]
    pub fn new() -> Result<Self> {
        use tracing::{debug, error};
        use windows::core::HSTRING;

        let mutex_name = HSTRING::from("Global\\BrightnessTray_SingleInstance_Mutex");

        unsafe {
            // An openable mutex means another instance already owns the name
            if let Ok(existing_handle) = OpenMutexW(SYNCHRONIZATION_SYNCHRONIZE, false, &mutex_name)
            {
                error!("another instance of BrightnessTray is already running");
                let _ = CloseHandle(existing_handle);
                Err(BrightnessTrayError::AlreadyRunning)
            } else {
                let mutex_handle = CreateMutexW(None, true, &mutex_name)?;
                debug!("single instance mutex created");
                Ok(Self { mutex_handle })
            }
        }
    }
}

#[cfg(windows)]
impl Drop for SingleInstanceGuard {
    #[expect(unsafe_code, reason = "Windows FFI for mutex cleanup")]
    fn drop(&mut self) {
        use tracing::debug;

        unsafe {
            let _ = CloseHandle(self.mutex_handle);
            debug!("single instance mutex released");
        }
    }
}

/// Stub implementation for non-Windows platforms
#[cfg(not(windows))]
pub struct SingleInstanceGuard;

#[cfg(not(windows))]
impl SingleInstanceGuard {
    /// Create a new single instance guard (stub for non-Windows, always succeeds)
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(windows)]
    fn test_single_instance_guard_lifecycle() {
        let guard1 = SingleInstanceGuard::new();
        assert!(guard1.is_ok(), "first instance should succeed");

        let guard2 = SingleInstanceGuard::new();
        assert!(guard2.is_err(), "second instance should fail");

        drop(guard1);

        let guard3 = SingleInstanceGuard::new();
        assert!(guard3.is_ok(), "instance after drop should succeed");
    }

    #[test]
    #[cfg(not(windows))]
    fn test_single_instance_guard_stub() {
        assert!(SingleInstanceGuard::new().is_ok());
        assert!(SingleInstanceGuard::new().is_ok());
    }
}
