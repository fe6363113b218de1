//! Operation coordination
//!
//! One controller ties the settings store, the native capability, and the
//! stepping rules together. Every entry point here is one of the operations
//! the hotkeys, the tray menu, and the command line expose.

pub mod brightness_controller;

pub use brightness_controller::{BrightnessController, StepOutcome};
