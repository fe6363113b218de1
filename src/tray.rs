//! System tray integration and the tray-mode event loop
//!
//! The tray icon and its context menu are the only UI: there is no main
//! window. Menu events arrive on a callback set by the tray library and are
//! forwarded into an mpsc channel; the Win32 message loop below pumps the
//! tray's internal windows, receives `WM_HOTKEY` for the thread-wide hotkey
//! registrations, and drains the menu channel after each dispatched message.

use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use tracing::{info, warn};

use brightness_tray::brightness::{RangeMode, StepDirection};
use brightness_tray::controller::{BrightnessController, StepOutcome};
use brightness_tray::error::{BrightnessTrayError, Result};
use brightness_tray::hotkeys::{HotkeyAction, HotkeyRegistration, InputDebouncer};
use brightness_tray::native::BoostApi;
use brightness_tray::settings::{Settings, SettingsStore};
use brightness_tray::utils::AutoStartManager;

use tray_icon::menu::{CheckMenuItem, Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIconBuilder};

use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

/// How the tray-mode event loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayExit {
    /// The user asked to quit.
    Quit,
    /// The user asked for a restart (menu item or dual-hotkey gesture);
    /// the caller relaunches after releasing the instance mutex.
    Restart,
}

/// The tray icon with its menu items.
struct Tray {
    tray: tray_icon::TrayIcon,
    brighter: MenuItem,
    darker: MenuItem,
    status: MenuItem,
    extended: CheckMenuItem,
    run_at_login: CheckMenuItem,
    restart: MenuItem,
    quit: MenuItem,
}

impl Tray {
    /// Build the tray icon and context menu.
    fn new(settings: Settings, auto_start: bool) -> Result<Self> {
        info!("creating system tray icon");

        let menu = Menu::new();

        let brighter = MenuItem::new("Brighter\tCtrl+Shift+Plus", true, None);
        let darker = MenuItem::new("Darker\tCtrl+Shift+Minus", true, None);
        let status = MenuItem::new(status_text(settings), false, None);
        let extended = CheckMenuItem::new(
            "Extended range",
            true,
            settings.range_mode == RangeMode::Extended,
            None,
        );
        let run_at_login = CheckMenuItem::new("Run at login", true, auto_start, None);
        let restart = MenuItem::new("Restart", true, None);
        let quit = MenuItem::new("Quit", true, None);

        for item in [&brighter, &darker, &status] {
            menu.append(item)
                .map_err(|e| BrightnessTrayError::Tray(format!("menu item: {e}")))?;
        }
        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| BrightnessTrayError::Tray(format!("separator: {e}")))?;
        for item in [&extended, &run_at_login] {
            menu.append(item)
                .map_err(|e| BrightnessTrayError::Tray(format!("menu item: {e}")))?;
        }
        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| BrightnessTrayError::Tray(format!("separator: {e}")))?;
        for item in [&restart, &quit] {
            menu.append(item)
                .map_err(|e| BrightnessTrayError::Tray(format!("menu item: {e}")))?;
        }

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_icon(default_icon()?)
            .with_tooltip(tooltip_text(settings))
            .build()
            .map_err(|e| BrightnessTrayError::Tray(format!("failed to build tray icon: {e}")))?;

        info!("system tray icon created");

        Ok(Self {
            tray,
            brighter,
            darker,
            status,
            extended,
            run_at_login,
            restart,
            quit,
        })
    }

    /// Bring the status row, tooltip, and mode checkbox in line with the
    /// persisted pair.
    fn refresh(&self, settings: Settings) {
        self.status.set_text(status_text(settings));
        self.extended
            .set_checked(settings.range_mode == RangeMode::Extended);
        if let Err(e) = self.tray.set_tooltip(Some(tooltip_text(settings))) {
            warn!("failed to update tray tooltip: {e}");
        }
    }

    /// React to one menu event. `Some` ends the event loop.
    fn handle<S: SettingsStore, A: BoostApi>(
        &self,
        event: &MenuEvent,
        controller: &BrightnessController<S, A>,
    ) -> Option<TrayExit> {
        let id = event.id();

        if id == self.brighter.id() {
            report_step(controller.step(StepDirection::Up));
        } else if id == self.darker.id() {
            report_step(controller.step(StepDirection::Down));
        } else if id == self.extended.id() {
            // The checkbox has already toggled itself by the time the event
            // arrives; its state is the requested mode.
            let mode = if self.extended.is_checked() {
                RangeMode::Extended
            } else {
                RangeMode::Normal
            };
            if let Err(e) = controller.set_range_mode(mode) {
                warn!("failed to switch range mode: {e}");
                self.extended.set_checked(mode != RangeMode::Extended);
            }
        } else if id == self.run_at_login.id() {
            let enable = self.run_at_login.is_checked();
            let result = if enable {
                AutoStartManager::enable()
            } else {
                AutoStartManager::disable()
            };
            if let Err(e) = result {
                warn!("failed to update auto-start: {e}");
                self.run_at_login.set_checked(!enable);
            }
        } else if id == self.restart.id() {
            return Some(TrayExit::Restart);
        } else if id == self.quit.id() {
            return Some(TrayExit::Quit);
        }

        self.refresh(controller.current());
        None
    }
}

/// Run tray mode to completion: hotkeys, tray icon, Win32 message loop.
#[expect(unsafe_code, reason = "Windows message loop FFI")]
pub fn run_event_loop<S: SettingsStore, A: BoostApi>(
    controller: &BrightnessController<S, A>,
) -> anyhow::Result<TrayExit> {
    let _hotkeys = HotkeyRegistration::register().context("Failed to register global hotkeys")?;

    let (menu_tx, menu_rx) = mpsc::channel();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = menu_tx.send(event);
    }));

    let tray = Tray::new(
        controller.current(),
        AutoStartManager::is_enabled().unwrap_or(false),
    )
    .context("Failed to create tray icon")?;

    let mut debouncer = InputDebouncer::new();
    let mut msg = MSG::default();

    info!("entering tray event loop");
    let exit = 'event_loop: loop {
        // SAFETY: standard blocking message pump; msg is a local the loop
        // owns for its whole lifetime.
        let ret = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        if ret.0 == -1 {
            anyhow::bail!("GetMessageW failed");
        }
        if ret.0 == 0 {
            // WM_QUIT
            break TrayExit::Quit;
        }

        if msg.message == WM_HOTKEY {
            if let Some(id) = HotkeyRegistration::id_from_wparam(msg.wParam.0) {
                match debouncer.observe(id, Instant::now()) {
                    HotkeyAction::Restart => {
                        info!("dual-hotkey restart gesture");
                        break TrayExit::Restart;
                    }
                    HotkeyAction::Step(direction) => {
                        report_step(controller.step(direction));
                        tray.refresh(controller.current());
                    }
                }
            }
            continue;
        }

        // SAFETY: dispatching the message GetMessageW just produced.
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        while let Ok(event) = menu_rx.try_recv() {
            if let Some(exit) = tray.handle(&event, controller) {
                break 'event_loop exit;
            }
        }
    };

    info!("tray event loop exited: {exit:?}");
    Ok(exit)
}

/// Log a step result; boundary outcomes are expected, failures are not.
fn report_step(result: Result<StepOutcome>) {
    match result {
        Ok(StepOutcome::Applied(level)) => info!("brightness now {level}"),
        Ok(StepOutcome::AtBoundary(level)) => info!("brightness already at {level}"),
        Err(e) => warn!("brightness step failed: {e}"),
    }
}

fn status_text(settings: Settings) -> String {
    format!(
        "Brightness: {} ({} range)",
        settings.brightness,
        settings.range_mode.as_str()
    )
}

fn tooltip_text(settings: Settings) -> String {
    format!("BrightnessTray - {}", settings.brightness)
}

/// Generate the 32x32 tray icon: a warm filled square with a darker border.
fn default_icon() -> Result<Icon> {
    const ICON_SIZE: usize = 32;
    const COLOR: (u8, u8, u8) = (250, 200, 60);

    let mut rgba = vec![0u8; ICON_SIZE * ICON_SIZE * 4];
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let idx = (y * ICON_SIZE + x) * 4;
            let border = x == 0 || x == ICON_SIZE - 1 || y == 0 || y == ICON_SIZE - 1;
            let (r, g, b) = if border {
                (COLOR.0 / 2, COLOR.1 / 2, COLOR.2 / 2)
            } else {
                COLOR
            };
            rgba[idx] = r;
            rgba[idx + 1] = g;
            rgba[idx + 2] = b;
            rgba[idx + 3] = 255;
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "ICON_SIZE is a small compile-time constant"
    )]
    let side = ICON_SIZE as u32;
    Icon::from_rgba(rgba, side, side)
        .map_err(|e| BrightnessTrayError::Tray(format!("failed to build tray icon image: {e}")))
}
