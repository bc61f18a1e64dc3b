//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves its input instance (file or preset)
//! 2. Calls into `core` for the actual work
//! 3. Formats and displays output through `ui`
//!
//! Handlers never print from inside `core`; validation stays pure.

mod check;
mod colors;
mod completion;
mod config_cmd;
mod show;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use colors::colors;
pub use completion::completion;
pub use config_cmd::config;
pub use show::show;

use crate::cli::args::{Command, InstanceArgs};
use crate::cli::{Context, Outcome};
use crate::core::instance::{Instance, Preset};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<Outcome> {
    match command {
        Command::Check {
            instance,
            all_conflicts,
            no_symmetry_warnings,
        } => check::check(ctx, &instance, all_conflicts, no_symmetry_warnings),
        Command::Colors { instance } => colors::colors(ctx, &instance),
        Command::Show { instance } => show::show(ctx, &instance),
        Command::Config => config_cmd::config(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load the instance named by the command-line arguments.
///
/// Falls back to the configured default preset when neither a file nor a
/// preset is given.
pub(crate) fn load_instance(ctx: &Context, args: &InstanceArgs) -> Result<Instance> {
    if let Some(path) = &args.file {
        output::debug(
            format!("loading instance from {}", path.display()),
            ctx.verbosity,
        );
        return Instance::load(path).context("Failed to load instance");
    }

    let preset: Preset = match args.preset {
        Some(arg) => arg.into(),
        None => ctx
            .config
            .default_preset()
            .context("Failed to resolve default preset")?,
    };
    output::debug(format!("using preset '{}'", preset.name()), ctx.verbosity);
    preset
        .instance()
        .with_context(|| format!("Failed to build preset '{}'", preset.name()))
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
