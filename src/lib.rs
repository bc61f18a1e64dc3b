//! colorcheck - Check graph colorings against adjacency constraints
//!
//! colorcheck takes an assignment of labels ("colors") to the nodes of a
//! graph and reports whether any two adjacent nodes share a label. It does
//! not search for a coloring; it only checks one.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`core`] - Domain types, the validator, instance files and configuration
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`ui`] - Output utilities and report rendering
//!
//! # Correctness Invariants
//!
//! colorcheck maintains the following invariants:
//!
//! 1. Validation is a pure function of its inputs
//! 2. A node with no label is an input error, never a silent pass
//! 3. Output formatting never happens inside validation

pub mod cli;
pub mod core;
pub mod ui;
