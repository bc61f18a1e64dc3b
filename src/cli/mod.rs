//! cli
//!
//! Command-line interface layer for colorcheck.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and build the execution context
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, loads inputs, and
//! calls into [`crate::core`] for validation. Rendering goes through
//! [`crate::ui`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};
use anyhow::{Context as _, Result};

/// Execution context shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Print machine-readable JSON instead of text
    pub json: bool,
    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Create a context with default configuration.
    pub fn new(verbosity: Verbosity, json: bool) -> Self {
        Self {
            verbosity,
            json,
            config: Config::default(),
        }
    }
}

/// How a command finished, for the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command completed; for `check`, the coloring is valid
    Success,
    /// `check` found at least one violation
    Invalid,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<Outcome> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let config = Config::load().context("Failed to load configuration")?;
    match config.loaded_from() {
        Some(path) => output::debug(format!("config loaded from {}", path.display()), verbosity),
        None => output::debug("no config file found, using defaults", verbosity),
    }

    let ctx = Context {
        verbosity,
        json: cli.json,
        config,
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
