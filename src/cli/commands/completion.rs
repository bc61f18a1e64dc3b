//! completion command - Generate shell completion scripts

use std::io::Write;

use crate::cli::args::{Cli, Shell};
use crate::cli::Outcome;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}

/// Write the completion script for `shell` to `out`.
fn write_completion(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(clap_complete::Shell::from(shell), &mut cmd, name, out);
}

/// Print the completion script for `shell` on stdout.
pub fn completion(shell: Shell) -> Result<Outcome> {
    write_completion(shell, &mut std::io::stdout());
    Ok(Outcome::Success)
}
