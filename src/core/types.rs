//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`NodeName`] - Identifier of a node (region) in the adjacency graph
//! - [`Label`] - A color assigned to a node
//!
//! # Validation
//!
//! Both types are opaque identifiers, but they enforce a minimal shape at
//! construction time so that a malformed instance file fails on load rather
//! than producing confusing reports.
//!
//! # Examples
//!
//! ```
//! use colorcheck::core::types::{Label, NodeName};
//!
//! let node = NodeName::new("NSW").unwrap();
//! let label = Label::new("green").unwrap();
//! assert_eq!(node.as_str(), "NSW");
//! assert_eq!(label.to_string(), "green");
//!
//! assert!(NodeName::new("").is_err());
//! assert!(Label::new(" red").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid node name: {0}")]
    InvalidNodeName(String),

    #[error("invalid label: {0}")]
    InvalidLabel(String),
}

/// Shared shape rules for identifiers.
///
/// Returns a description of the first rule broken.
fn check_identifier(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("cannot be empty");
    }
    if value.trim() != value {
        return Err("cannot start or end with whitespace");
    }
    if value.chars().any(|c| c.is_control()) {
        return Err("cannot contain control characters");
    }
    Ok(())
}

/// A validated node identifier.
///
/// # Example
///
/// ```
/// use colorcheck::core::types::NodeName;
///
/// let name = NodeName::new("WA").unwrap();
/// assert_eq!(name.as_str(), "WA");
///
/// assert!(NodeName::new("\tWA").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeName(String);

impl NodeName {
    /// Create a new validated node name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidNodeName` if the name is empty, padded with
    /// whitespace, or contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        check_identifier(&name)
            .map_err(|rule| TypeError::InvalidNodeName(format!("'{}' {}", name, rule)))?;
        Ok(Self(name))
    }

    /// Get the node name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeName> for String {
    fn from(name: NodeName) -> Self {
        name.0
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated color label.
///
/// Labels compare by exact text: `"Red"` and `"red"` are different colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Create a new validated label.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidLabel` under the same rules as [`NodeName::new`].
    pub fn new(label: impl Into<String>) -> Result<Self, TypeError> {
        let label = label.into();
        check_identifier(&label)
            .map_err(|rule| TypeError::InvalidLabel(format!("'{}' {}", label, rule)))?;
        Ok(Self(label))
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
