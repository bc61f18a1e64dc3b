//! core::instance
//!
//! A coloring problem instance: a graph plus the coloring under test.
//!
//! # File Format
//!
//! Instances are TOML documents:
//!
//! ```toml
//! name = "Australia"
//!
//! [coloring]
//! WA = "blue"
//! NT = "green"
//!
//! [adjacency]
//! WA = ["NT"]
//! NT = ["WA"]
//! ```
//!
//! The order of `[adjacency]` entries is the order nodes are scanned in.
//!
//! # Presets
//!
//! [`Preset`] provides built-in instances so the binary works without input.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use super::coloring::Coloring;
use super::graph::AdjacencyGraph;
use super::types::{Label, NodeName, TypeError};

/// Errors from loading an instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("failed to read instance file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse instance{}: {message}", origin(.path))]
    ParseError {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("unknown preset '{0}', must be one of: {1}")]
    UnknownPreset(String, String),

    #[error(transparent)]
    InvalidValue(#[from] TypeError),
}

fn origin(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| format!(" file '{}'", path.display()))
        .unwrap_or_default()
}

/// A coloring together with the graph it must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Instance {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Node → label assignment
    #[serde(default)]
    pub coloring: Coloring,

    /// Node → neighbors, in scan order
    #[serde(default)]
    pub adjacency: AdjacencyGraph,
}

impl Instance {
    /// Load an instance from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `InstanceError::ReadError` if the file cannot be read and
    /// `InstanceError::ParseError` if it is not a valid instance.
    pub fn load(path: &Path) -> Result<Self, InstanceError> {
        let contents = fs::read_to_string(path).map_err(|e| InstanceError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&contents, Some(path))
    }

    /// Parse an instance from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use colorcheck::core::instance::Instance;
    ///
    /// let instance = Instance::from_toml_str(r#"
    ///     [coloring]
    ///     A = "red"
    ///     B = "blue"
    ///
    ///     [adjacency]
    ///     A = ["B"]
    ///     B = ["A"]
    /// "#).unwrap();
    ///
    /// assert_eq!(instance.adjacency.node_count(), 2);
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, InstanceError> {
        Self::parse(contents, None)
    }

    fn parse(contents: &str, path: Option<&Path>) -> Result<Self, InstanceError> {
        toml::from_str(contents).map_err(|e| InstanceError::ParseError {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })
    }

    /// Name for display, falling back to a generic one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("coloring")
    }
}

/// Built-in instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// The seven states and territories of Australia, 3-colored
    Australia,
}

impl Preset {
    /// All presets, for help text and error messages.
    pub const ALL: [Preset; 1] = [Preset::Australia];

    /// The preset's command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Australia => "australia",
        }
    }

    /// Build the preset instance.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in data is malformed.
    pub fn instance(self) -> Result<Instance, InstanceError> {
        match self {
            Preset::Australia => australia(),
        }
    }
}

impl FromStr for Preset {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                InstanceError::UnknownPreset(s.to_string(), names.join(", "))
            })
    }
}

/// Regions of Australia with their borders. Tasmania is an island.
const AUSTRALIA_ADJACENCY: [(&str, &[&str]); 7] = [
    ("WA", &["NT", "SA"]),
    ("NT", &["WA", "SA", "Q"]),
    ("SA", &["WA", "NT", "Q", "NSW", "V"]),
    ("Q", &["NT", "SA", "NSW"]),
    ("NSW", &["Q", "SA", "V"]),
    ("V", &["SA", "NSW"]),
    ("T", &[]),
];

const AUSTRALIA_COLORING: [(&str, &str); 7] = [
    ("WA", "blue"),
    ("NT", "green"),
    ("SA", "red"),
    ("Q", "blue"),
    ("NSW", "green"),
    ("V", "blue"),
    ("T", "red"),
];

fn australia() -> Result<Instance, InstanceError> {
    let mut adjacency = AdjacencyGraph::new();
    for (region, borders) in AUSTRALIA_ADJACENCY {
        let region = NodeName::new(region)?;
        adjacency.add_node(region.clone());
        for border in borders {
            adjacency.add_arc(region.clone(), NodeName::new(*border)?);
        }
    }

    let coloring = AUSTRALIA_COLORING
        .into_iter()
        .map(|(region, color)| -> Result<_, TypeError> {
            Ok((NodeName::new(region)?, Label::new(color)?))
        })
        .collect::<Result<Coloring, TypeError>>()?;

    Ok(Instance {
        name: Some("Australia".to_string()),
        coloring,
        adjacency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::validate;

    #[test]
    fn australia_is_a_valid_three_coloring() {
        let instance = Preset::Australia.instance().unwrap();
        let report = validate(&instance.coloring, &instance.adjacency).unwrap();

        assert!(report.is_valid);
        assert_eq!(instance.coloring.colors_used().count, 3);
        assert_eq!(instance.adjacency.node_count(), 7);
        assert_eq!(instance.adjacency.edge_count(), 9);
        assert!(instance.adjacency.asymmetric_arcs().is_empty());
    }

    #[test]
    fn australia_tasmania_is_isolated() {
        let instance = Preset::Australia.instance().unwrap();
        let tas = NodeName::new("T").unwrap();
        assert!(instance.adjacency.neighbors(&tas).is_empty());
    }

    #[test]
    fn preset_from_str() {
        assert_eq!("australia".parse::<Preset>().unwrap(), Preset::Australia);
        let err = "europe".parse::<Preset>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown preset 'europe', must be one of: australia"
        );
    }

    #[test]
    fn parse_minimal_instance() {
        let instance = Instance::from_toml_str(
            r#"
            [coloring]
            A = "red"

            [adjacency]
            A = []
            "#,
        )
        .unwrap();

        assert!(instance.name.is_none());
        assert_eq!(instance.display_name(), "coloring");
        assert_eq!(instance.coloring.len(), 1);
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let err = Instance::from_toml_str("colours = {}\n").unwrap_err();
        assert!(matches!(err, InstanceError::ParseError { path: None, .. }));
        assert!(err.to_string().starts_with("failed to parse instance: "));
    }

    #[test]
    fn parse_rejects_invalid_node_name() {
        let result = Instance::from_toml_str("[adjacency]\nA = [\"\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = Instance::load(Path::new("/nonexistent/instance.toml")).unwrap_err();
        assert!(matches!(err, InstanceError::ReadError { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.toml");
        fs::write(
            &path,
            r#"
name = "Triangle"

[coloring]
A = "red"
B = "green"
C = "blue"

[adjacency]
A = ["B", "C"]
B = ["A", "C"]
C = ["A", "B"]
"#,
        )
        .unwrap();

        let instance = Instance::load(&path).unwrap();
        assert_eq!(instance.display_name(), "Triangle");
        assert!(validate(&instance.coloring, &instance.adjacency)
            .unwrap()
            .is_valid);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[coloring\n").unwrap();

        let err = Instance::load(&path).unwrap_err();
        assert!(matches!(err, InstanceError::ParseError { path: Some(_), .. }));
        assert!(err.to_string().starts_with("failed to parse instance file '"));
        assert!(err.to_string().contains("broken.toml"));
    }
}
