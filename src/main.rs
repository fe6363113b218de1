//! `BrightnessTray` - Per-monitor HDR brightness boost control for Windows
//!
//! With no arguments this starts the tray application (hotkeys, tray menu,
//! restore of the persisted level). With a subcommand it runs one brightness
//! operation against the current displays and exits.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Tray UI module is only in the binary, not the library
#[cfg(windows)]
mod tray;

use anyhow::{Context, Result};
use brightness_tray::{
    brightness::StepDirection,
    cli::{Cli, Command},
    controller::{BrightnessController, StepOutcome},
    native::{BoostApi, DwmBoostApi},
    settings::SettingsStore,
    utils,
    utils::console::ConsoleGuard,
};
use clap::Parser;

/// Main entry point: dispatch between one-shot command mode and tray mode.
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => run_command(command),
        None => run_tray(),
    }
}

/// Build the settings store for this platform.
#[cfg(windows)]
fn settings_store() -> brightness_tray::settings::RegistrySettings {
    brightness_tray::settings::RegistrySettings::new()
}

/// Non-Windows builds get a volatile store so the binary still links.
#[cfg(not(windows))]
fn settings_store() -> brightness_tray::settings::MemorySettings {
    brightness_tray::settings::MemorySettings::default()
}

/// Run a one-shot command against the current displays and exit.
fn run_command(command: Command) -> Result<()> {
    // Keep the console guard alive until the result line is printed
    let _console = ConsoleGuard::attach();
    utils::logging::init_command_logging();

    let controller = BrightnessController::new(settings_store(), DwmBoostApi::new());

    if let Err(e) = execute(&controller, command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

/// Map one subcommand onto its controller operation and echo the result.
fn execute<S: SettingsStore, A: BoostApi>(
    controller: &BrightnessController<S, A>,
    command: Command,
) -> brightness_tray::Result<()> {
    match command {
        Command::Set { value } => {
            let applied = controller.set(value)?;
            println!("Brightness set to {applied}");
        }
        Command::DebugSet { value } => {
            let applied = controller.set_unclamped(value)?;
            println!("Brightness set to {applied} (unclamped)");
        }
        Command::Brighter => {
            report_step(controller.step(StepDirection::Up)?, StepDirection::Up);
        }
        Command::ExtBrighter => {
            report_step(
                controller.step_forced_extended(StepDirection::Up)?,
                StepDirection::Up,
            );
        }
        Command::Darker => {
            report_step(controller.step(StepDirection::Down)?, StepDirection::Down);
        }
    }
    Ok(())
}

/// Echo a step outcome as a single console line.
fn report_step(outcome: StepOutcome, direction: StepDirection) {
    match outcome {
        StepOutcome::Applied(level) => println!("Brightness set to {level}"),
        StepOutcome::AtBoundary(level) => match direction {
            StepDirection::Up => println!("Already at maximum brightness ({level})"),
            StepDirection::Down => println!("Already at minimum brightness ({level})"),
        },
    }
}

/// Run the long-lived tray application.
#[cfg(windows)]
fn run_tray() -> Result<()> {
    use brightness_tray::error::get_user_friendly_error;
    use brightness_tray::utils::SingleInstanceGuard;
    use tracing::{error, info, warn};

    utils::init_logging().context("Failed to initialize logging system")?;
    info!("BrightnessTray v{} starting...", env!("CARGO_PKG_VERSION"));

    // Enforce single instance before any other initialization; a second
    // tray would double-register the hotkeys.
    let single_instance_guard = match SingleInstanceGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            error!("single instance check failed: {e}");
            show_error_and_exit(&get_user_friendly_error(&e));
            return Err(e.into());
        }
    };
    info!("single instance check passed");

    let controller = BrightnessController::new(settings_store(), DwmBoostApi::new());

    // Restore is best-effort: a laptop on the road has no boost-capable
    // display, but the tray should still come up.
    match controller.restore() {
        Ok(level) => info!("restored persisted brightness {level}"),
        Err(e) => warn!("could not restore persisted brightness: {e}"),
    }

    let exit = tray::run_event_loop(&controller).context("Tray event loop terminated with error")?;

    // Release the mutex before relaunching so the replacement's own
    // instance check cannot race the dying parent.
    drop(single_instance_guard);

    if exit == tray::TrayExit::Restart {
        utils::relaunch::relaunch().context("Failed to relaunch")?;
    }

    info!("BrightnessTray shutting down");
    Ok(())
}

/// Tray mode is Windows-only.
#[cfg(not(windows))]
fn run_tray() -> Result<()> {
    eprintln!("BrightnessTray's tray mode is Windows-only.");
    eprintln!("The command-line subcommands are available for development builds.");
    Ok(())
}

/// Shows an error dialog and exits the application.
#[cfg(windows)]
fn show_error_and_exit(message: &str) {
    use rfd::MessageDialog;

    MessageDialog::new()
        .set_title("BrightnessTray - Error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();

    std::process::exit(1);
}
