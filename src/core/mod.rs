//! core
//!
//! Core domain types, validation, and input loading for colorcheck.
//!
//! # Modules
//!
//! - [`types`] - Strong types: NodeName, Label
//! - [`coloring`] - Node → label assignment and colors-used summary
//! - [`graph`] - Adjacency graph representation and diagnostics
//! - [`validate`] - Proper-coloring validation
//! - [`instance`] - Instance files and built-in presets
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid identifiers from entering a check
//! - Validation is pure; presentation lives in [`crate::ui`]
//! - All validation is deterministic

pub mod coloring;
pub mod config;
pub mod graph;
pub mod instance;
mod ordered;
pub mod types;
pub mod validate;
