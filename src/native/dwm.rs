//! Compositor brightness-boost binding
//!
//! The boost primitive is not a documented export: dwmapi.dll exposes it by
//! numeric ordinal only, with the shape `fn(HMONITOR, f64) -> HRESULT`. The
//! module loads the library and resolves the ordinal on first use, caching
//! the function pointer for the life of the process (dwmapi is never
//! unloaded). Resolution failure is a reportable, non-fatal condition - the
//! apply operation aborts before touching any display.

use crate::error::Result;
use crate::native::{BoostApi, DisplayHandle};

#[cfg(windows)]
pub use windows_impl::DwmBoostApi;

#[cfg(windows)]
mod windows_impl {
    use std::sync::OnceLock;

    use windows::Win32::Graphics::Gdi::HMONITOR;
    use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
    use windows::core::{HRESULT, HSTRING, PCSTR};

    use super::{BoostApi, DisplayHandle, Result};
    use crate::error::BrightnessTrayError;
    use crate::native::displays;

    /// Ordinal of the SDR-to-HDR boost export in dwmapi.dll
    const BOOST_ORDINAL: usize = 171;

    /// Shape of the undocumented boost export
    type BoostFn = unsafe extern "system" fn(HMONITOR, f64) -> HRESULT;

    /// `BoostApi` adapter over the dwmapi ordinal export.
    #[derive(Default)]
    pub struct DwmBoostApi {
        boost: OnceLock<BoostFn>,
    }

    impl DwmBoostApi {
        /// Create the adapter; the export is resolved lazily on first use.
        pub fn new() -> Self {
            Self::default()
        }

        fn resolve(&self) -> Result<BoostFn> {
            if let Some(boost) = self.boost.get() {
                return Ok(*boost);
            }
            let boost = load_boost_fn()?;
            Ok(*self.boost.get_or_init(|| boost))
        }
    }

    impl BoostApi for DwmBoostApi {
        fn available(&self) -> Result<()> {
            self.resolve().map(|_| ())
        }

        fn displays(&self) -> Result<Vec<DisplayHandle>> {
            displays::enumerate()
        }

        /// # Safety
        ///
        /// The function pointer was resolved from dwmapi.dll, which stays
        /// loaded for the process lifetime; the handle is an HMONITOR value
        /// produced by enumeration. The HRESULT is checked before returning.
        #[expect(
            unsafe_code,
            reason = "Required to call the dynamically resolved compositor export"
        )]
        fn apply(&self, display: &DisplayHandle, level: f64) -> Result<()> {
            let boost = self.resolve()?;
            let monitor = HMONITOR(display.raw() as *mut core::ffi::c_void);
            let hr = unsafe { boost(monitor, level) };
            hr.ok().map_err(BrightnessTrayError::WindowsApi)
        }
    }

    /// Load dwmapi.dll and resolve the boost export by ordinal.
    ///
    /// # Safety
    ///
    /// dwmapi.dll ships with every supported Windows build; the pointer is
    /// validated before the transmute to the known export shape. A missing
    /// ordinal (older compositor) surfaces as a typed error, never a panic.
    #[expect(
        unsafe_code,
        reason = "Windows FFI to resolve an ordinal-only export from dwmapi.dll"
    )]
    fn load_boost_fn() -> Result<BoostFn> {
        use std::mem::transmute;

        unsafe {
            let dwmapi_name = HSTRING::from("dwmapi.dll");
            let dwmapi = LoadLibraryW(&dwmapi_name).map_err(|e| {
                BrightnessTrayError::BoostApiUnavailable(format!("dwmapi.dll not loadable: {e}"))
            })?;

            // Ordinal imports pass the ordinal where the name pointer goes.
            let ordinal = PCSTR(BOOST_ORDINAL as *const u8);
            let Some(boost_ptr) = GetProcAddress(dwmapi, ordinal) else {
                return Err(BrightnessTrayError::BoostApiUnavailable(format!(
                    "ordinal {BOOST_ORDINAL} not found in dwmapi.dll"
                )));
            };

            Ok(transmute::<
                unsafe extern "system" fn() -> isize,
                BoostFn,
            >(boost_ptr))
        }
    }
}

/// Stub adapter for non-Windows platforms.
///
/// Reports the capability as unavailable so the broadcast path exercises its
/// abort-before-touching-displays branch, keeping the library and its tests
/// cross-platform.
#[cfg(not(windows))]
#[derive(Debug, Default)]
pub struct DwmBoostApi;

#[cfg(not(windows))]
impl DwmBoostApi {
    /// Create the stub adapter.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl BoostApi for DwmBoostApi {
    fn available(&self) -> Result<()> {
        Err(crate::error::BrightnessTrayError::BoostApiUnavailable(
            "compositor boost requires Windows".to_string(),
        ))
    }

    fn displays(&self) -> Result<Vec<DisplayHandle>> {
        Ok(Vec::new())
    }

    fn apply(&self, _display: &DisplayHandle, _level: f64) -> Result<()> {
        Err(crate::error::BrightnessTrayError::BoostApiUnavailable(
            "compositor boost requires Windows".to_string(),
        ))
    }
}
