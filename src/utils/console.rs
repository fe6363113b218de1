//! Console attachment for command mode
//!
//! The binary is built with the GUI subsystem, so one-shot commands have no
//! console of their own. Attach to the parent's console when launched from
//! one, or allocate a fresh console as a fallback, so the result line is
//! actually visible. RAII: an allocated console is freed on drop.

/// Guard over an attached or allocated console.
#[cfg(windows)]
pub struct ConsoleGuard {
    allocated: bool,
}

#[cfg(windows)]
impl ConsoleGuard {
    /// Attach to the parent process's console, allocating one if there is
    /// no parent console to attach to. Never fails: worst case output goes
    /// nowhere, which is no worse than not attaching at all.
    #[expect(unsafe_code, reason = "Windows FFI for console attachment")]
    pub fn attach() -> Self {
        use windows::Win32::System::Console::{ATTACH_PARENT_PROCESS, AllocConsole, AttachConsole};

        unsafe {
            if AttachConsole(ATTACH_PARENT_PROCESS).is_ok() {
                Self { allocated: false }
            } else if AllocConsole().is_ok() {
                Self { allocated: true }
            } else {
                Self { allocated: false }
            }
        }
    }
}

#[cfg(windows)]
impl Drop for ConsoleGuard {
    #[expect(unsafe_code, reason = "Windows FFI for console cleanup")]
    fn drop(&mut self) {
        use windows::Win32::System::Console::FreeConsole;

        if self.allocated {
            unsafe {
                let _ = FreeConsole();
            }
        }
    }
}

/// Stub for non-Windows platforms: stdout already works.
#[cfg(not(windows))]
pub struct ConsoleGuard;

#[cfg(not(windows))]
impl ConsoleGuard {
    /// No-op on platforms with a real stdout.
    pub fn attach() -> Self {
        Self
    }
}
