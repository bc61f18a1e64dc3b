//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing and diagnostics
//! - [`report`] - Rendering of validation results and instances
//!
//! # Design
//!
//! All output goes through this module to ensure consistent formatting and
//! proper handling of quiet and debug modes.

pub mod output;
pub mod report;
