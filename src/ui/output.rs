//! ui::output
//!
//! Verbosity-gated output for the CLI.
//!
//! Report text goes to stdout. Diagnostics (debug lines, warnings, errors)
//! go to stderr with a tag, so `--json` output and piped reports stay clean.
//! `--quiet` silences everything except errors.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Reports and warnings
    Normal,
    /// Reports, warnings and `[debug]` lines
    Debug,
}

impl Verbosity {
    /// Create verbosity from the `--quiet` and `--debug` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Whether messages of the given kind are shown at this level.
    pub fn shows(self, kind: Diagnostic) -> bool {
        match kind {
            Diagnostic::Error => true,
            Diagnostic::Warning => self != Verbosity::Quiet,
            Diagnostic::Debug => self == Verbosity::Debug,
        }
    }
}

/// Kinds of stderr message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    Debug,
    Warning,
    Error,
}

impl Diagnostic {
    fn tag(self) -> &'static str {
        match self {
            Diagnostic::Debug => "[debug]",
            Diagnostic::Warning => "warning:",
            Diagnostic::Error => "error:",
        }
    }

    /// Format a message as a tagged stderr line.
    pub fn line(self, message: impl Display) -> String {
        format!("{} {}", self.tag(), message)
    }
}

fn emit(kind: Diagnostic, message: impl Display, verbosity: Verbosity) {
    if verbosity.shows(kind) {
        eprintln!("{}", kind.line(message));
    }
}

/// Print report text to stdout unless quiet.
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug line to stderr in debug mode.
pub fn debug(message: impl Display, verbosity: Verbosity) {
    emit(Diagnostic::Debug, message, verbosity);
}

/// Print a warning to stderr unless quiet.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    emit(Diagnostic::Warning, message, verbosity);
}

/// Print an error to stderr. Always shown.
pub fn error(message: impl Display) {
    emit(Diagnostic::Error, message, Verbosity::Quiet);
}

/// Format a list of items, one per line.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format items inline, separated by `", "`.
pub fn format_inline<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
