//! Global hotkey registration
//!
//! Registers the two brightness hotkeys thread-wide (no window handle), so
//! `WM_HOTKEY` messages land directly on the registering thread's message
//! queue - the message loop in the binary picks them up without a hidden
//! window. Registration is RAII: dropping the guard unregisters both keys.

use tracing::{debug, error};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    MOD_CONTROL, MOD_SHIFT, RegisterHotKey, UnregisterHotKey, VK_OEM_MINUS, VK_OEM_PLUS,
};

use super::HotkeyId;
use crate::error::{BrightnessTrayError, Result};

/// `WM_HOTKEY` identifier for the "brighter" key
const HOTKEY_ID_INCREASE: i32 = 1;

/// `WM_HOTKEY` identifier for the "darker" key
const HOTKEY_ID_DECREASE: i32 = 2;

/// RAII guard holding both global hotkey registrations.
///
/// Bindings: Ctrl+Shift+Plus increases, Ctrl+Shift+Minus decreases. Key
/// repeat is left enabled so holding a chord keeps stepping.
pub struct HotkeyRegistration {
    registered: Vec<i32>,
}

impl HotkeyRegistration {
    /// Register both hotkeys on the calling thread.
    ///
    /// Fails when another application already owns one of the chords; a
    /// partial registration is rolled back before returning.
    #[expect(unsafe_code, reason = "Windows FFI for global hotkey registration")]
    pub fn register() -> Result<Self> {
        let bindings = [
            (HOTKEY_ID_INCREASE, VK_OEM_PLUS, "Ctrl+Shift+Plus"),
            (HOTKEY_ID_DECREASE, VK_OEM_MINUS, "Ctrl+Shift+Minus"),
        ];

        let mut guard = Self {
            registered: Vec::with_capacity(bindings.len()),
        };

        for (id, key, chord) in bindings {
            // SAFETY: no window handle means a thread-queue registration;
            // the id values are private to this process.
            let result =
                unsafe { RegisterHotKey(None, id, MOD_CONTROL | MOD_SHIFT, u32::from(key.0)) };
            if let Err(e) = result {
                error!("failed to register {chord}: {e}");
                // Drop rolls back whatever was registered so far
                return Err(BrightnessTrayError::HotkeyRegistration(format!(
                    "{chord} ({e})"
                )));
            }
            debug!("registered global hotkey {chord}");
            guard.registered.push(id);
        }

        Ok(guard)
    }

    /// Map a `WM_HOTKEY` wParam back to the logical hotkey, if it is ours.
    pub fn id_from_wparam(wparam: usize) -> Option<HotkeyId> {
        match i32::try_from(wparam) {
            Ok(HOTKEY_ID_INCREASE) => Some(HotkeyId::Increase),
            Ok(HOTKEY_ID_DECREASE) => Some(HotkeyId::Decrease),
            _ => None,
        }
    }
}

impl Drop for HotkeyRegistration {
    #[expect(unsafe_code, reason = "Windows FFI for hotkey cleanup")]
    fn drop(&mut self) {
        for id in self.registered.drain(..) {
            // SAFETY: unregistering ids this guard registered on this thread
            unsafe {
                let _ = UnregisterHotKey(None, id);
            }
        }
        debug!("global hotkeys released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_wparam() {
        assert_eq!(
            HotkeyRegistration::id_from_wparam(1),
            Some(HotkeyId::Increase)
        );
        assert_eq!(
            HotkeyRegistration::id_from_wparam(2),
            Some(HotkeyId::Decrease)
        );
        assert_eq!(HotkeyRegistration::id_from_wparam(3), None);
        assert_eq!(HotkeyRegistration::id_from_wparam(usize::MAX), None);
    }
}
