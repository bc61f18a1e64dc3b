//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::instance::Preset;

/// colorcheck - Check graph colorings against adjacency constraints
#[derive(Parser, Debug)]
#[command(name = "colorcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Where to read the instance from.
#[derive(Args, Debug, Clone, Default)]
pub struct InstanceArgs {
    /// Instance file (TOML with [coloring] and [adjacency] tables)
    #[arg(value_name = "FILE", conflicts_with = "preset")]
    pub file: Option<PathBuf>,

    /// Use a built-in instance instead of a file
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that no two adjacent nodes share a color
    #[command(
        name = "check",
        long_about = "Check that no two adjacent nodes share a color.\n\n\
            Each node is scanned in the order it appears under [adjacency]. Its \
            neighbors are compared in list order, and by default scanning a node \
            stops at its first conflicting neighbor.\n\n\
            Exits with status 0 when the coloring is valid, 1 when it is not, and \
            2 when the input is malformed (for example a node with no color).",
        after_help = "\
EXAMPLES:
    # Check the built-in map of Australia
    colorcheck check

    # Check an instance file
    colorcheck check map.toml

    # Report every conflicting neighbor, not just the first per node
    colorcheck check map.toml --all-conflicts

INSTANCE FILE FORMAT:
    name = \"Triangle\"

    [coloring]
    A = \"red\"
    B = \"green\"
    C = \"blue\"

    [adjacency]
    A = [\"B\", \"C\"]
    B = [\"A\", \"C\"]
    C = [\"A\", \"B\"]"
    )]
    Check {
        #[command(flatten)]
        instance: InstanceArgs,

        /// Report every conflicting neighbor of each node
        #[arg(long)]
        all_conflicts: bool,

        /// Do not warn about neighbor lists missing their reverse entry
        #[arg(long)]
        no_symmetry_warnings: bool,
    },

    /// Show the distinct colors a coloring uses
    Colors {
        #[command(flatten)]
        instance: InstanceArgs,
    },

    /// Show the regions, adjacencies and coloring of an instance
    Show {
        #[command(flatten)]
        instance: InstanceArgs,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completion scripts
    #[command(after_help = "\
INSTALLATION:
    # Bash
    colorcheck completion bash > ~/.local/share/bash-completion/completions/colorcheck

    # Zsh
    colorcheck completion zsh > ~/.zfunc/_colorcheck

    # Fish
    colorcheck completion fish > ~/.config/fish/completions/colorcheck.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Built-in instances
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetArg {
    /// The states and territories of Australia
    Australia,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Australia => Preset::Australia,
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_defaults() {
        let cli = Cli::try_parse_from(["colorcheck", "check"]).unwrap();
        match cli.command {
            Command::Check {
                instance,
                all_conflicts,
                no_symmetry_warnings,
            } => {
                assert!(instance.file.is_none());
                assert!(instance.preset.is_none());
                assert!(!all_conflicts);
                assert!(!no_symmetry_warnings);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn file_and_preset_conflict() {
        let result = Cli::try_parse_from([
            "colorcheck",
            "check",
            "map.toml",
            "--preset",
            "australia",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["colorcheck", "colors", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }
}
