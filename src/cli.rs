//! Command-line surface
//!
//! One-shot subcommands mapping straight onto controller operations. Each
//! invocation is its own process: it reads the persisted pair, performs one
//! operation, prints a single result line, and exits. Deliberately not
//! covered by the tray's single-instance guard; concurrent writers resolve
//! to last-writer-wins on the persisted pair.

use clap::{Parser, Subcommand};

/// Per-monitor HDR brightness boost control.
///
/// Without a subcommand the tray application starts; with one, the process
/// runs the command against the current displays and exits.
#[derive(Debug, Parser)]
#[command(name = "brightness-tray", version, about)]
pub struct Cli {
    /// Operation to run instead of starting the tray
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The one-shot operations.
#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum Command {
    /// Apply an absolute boost level, clamped to 1.0..=6.0
    Set {
        /// Boost level to apply
        value: f64,
    },
    /// Apply an absolute boost level with no clamping (diagnostics)
    DebugSet {
        /// Boost level to apply verbatim
        value: f64,
    },
    /// Step brightness up against the persisted range mode's ceiling
    Brighter,
    /// Step brightness up against the extended ceiling (12.0) without
    /// changing the persisted range mode
    ExtBrighter,
    /// Step brightness down against the persisted range mode's ceiling
    Darker,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_subcommand_means_tray_mode() {
        let cli = parse(&["brightness-tray"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_set_takes_a_value() {
        let cli = parse(&["brightness-tray", "set", "4.5"]);
        assert_eq!(cli.command, Some(Command::Set { value: 4.5 }));
    }

    #[test]
    fn test_debug_set_spelling() {
        let cli = parse(&["brightness-tray", "debug-set", "9.7"]);
        assert_eq!(cli.command, Some(Command::DebugSet { value: 9.7 }));
    }

    #[test]
    fn test_step_commands() {
        assert_eq!(parse(&["brightness-tray", "brighter"]).command, Some(Command::Brighter));
        assert_eq!(parse(&["brightness-tray", "darker"]).command, Some(Command::Darker));
        assert_eq!(
            parse(&["brightness-tray", "ext-brighter"]).command,
            Some(Command::ExtBrighter)
        );
    }

    #[test]
    fn test_set_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["brightness-tray", "set", "bright"]).is_err());
    }

    #[test]
    fn test_set_requires_a_value() {
        assert!(Cli::try_parse_from(["brightness-tray", "set"]).is_err());
    }
}
