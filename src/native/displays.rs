//! Active display enumeration
//!
//! Thin wrapper over `EnumDisplayMonitors` yielding opaque handles. No
//! caching: the monitor set is re-read on every brightness apply so
//! hot-plugged displays are picked up without a refresh step.

use crate::error::Result;
use crate::native::DisplayHandle;

/// Enumerate all active monitors.
///
/// # Safety
///
/// `EnumDisplayMonitors` is called with a callback that only runs during the
/// call itself; the `LPARAM` points at a `Vec` that outlives the call and is
/// touched by nothing else while the enumeration runs.
#[cfg(windows)]
#[expect(
    unsafe_code,
    reason = "Windows FFI for monitor enumeration; callback lifetime documented above"
)]
pub fn enumerate() -> Result<Vec<DisplayHandle>> {
    use windows::Win32::Foundation::{LPARAM, RECT};
    use windows::Win32::Graphics::Gdi::{EnumDisplayMonitors, HDC, HMONITOR};
    use windows::core::BOOL;

    unsafe extern "system" fn collect(
        monitor: HMONITOR,
        _hdc: HDC,
        _clip: *mut RECT,
        data: LPARAM,
    ) -> BOOL {
        // SAFETY: data is the address of the Vec below, valid for the whole
        // enumeration and not aliased while it runs.
        let handles = unsafe { &mut *(data.0 as *mut Vec<DisplayHandle>) };
        handles.push(DisplayHandle::from_raw(monitor.0 as isize));
        BOOL::from(true)
    }

    let mut handles: Vec<DisplayHandle> = Vec::new();
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(collect),
            LPARAM(&raw mut handles as isize),
        )
    };

    if ok.as_bool() {
        Ok(handles)
    } else {
        Err(std::io::Error::last_os_error().into())
    }
}

/// Stub for non-Windows platforms: there are no displays to enumerate.
#[cfg(not(windows))]
pub fn enumerate() -> Result<Vec<DisplayHandle>> {
    Ok(Vec::new())
}
