//! Process relaunch
//!
//! The restart path (tray menu item or the dual-hotkey gesture) spawns a
//! fresh copy of the current executable and lets the caller exit. The
//! caller must release the single-instance mutex before calling this, or
//! the replacement's own instance check races the dying parent.

use tracing::info;

use crate::error::Result;

/// Spawn a new instance of the current executable with no arguments.
pub fn relaunch() -> Result<()> {
    let exe = std::env::current_exe()?;
    std::process::Command::new(&exe).spawn()?;
    info!("relaunched {}", exe.display());
    Ok(())
}
