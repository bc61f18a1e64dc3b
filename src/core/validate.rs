//! core::validate
//!
//! Proper-coloring validation.
//!
//! # Algorithm
//!
//! For each node in graph order, every neighbor label is looked up, then the
//! neighbors are scanned in list order for one sharing the node's label.
//! In [`ScanMode::FirstConflict`] (the default) the scan of a node stops at
//! its first conflict, so a node is reported at most once per pass.
//!
//! Conflicts are found per arc, from the side being scanned. With asymmetric
//! adjacency data a conflict can be seen from one side only.
//!
//! # Invariants
//!
//! - Never mutates its inputs and has no side effects
//! - Must be deterministic
//! - A missing label aborts the pass; it is never reported as a violation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coloring::Coloring;
use super::graph::AdjacencyGraph;
use super::types::{Label, NodeName};

/// Errors from validation.
///
/// These signal malformed input, as opposed to a well-formed coloring that
/// happens to be invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("node '{node}' has no label in the coloring")]
    MissingLabel { node: NodeName },
}

/// How many conflicts to report per scanned node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// Stop scanning a node at its first conflicting neighbor
    #[default]
    FirstConflict,
    /// Report every conflicting neighbor of every node
    AllConflicts,
}

/// Two adjacent nodes sharing a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The node being scanned
    pub node: NodeName,
    /// The neighbor found holding the same label
    pub neighbor: NodeName,
    /// The label both hold
    pub shared_label: Label,
}

/// A neighbor together with its resolved label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborLabel {
    pub node: NodeName,
    pub label: Label,
}

/// What the scan of one node saw.
///
/// Kept for presentation only; validity is decided by the violations list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeCheck {
    /// The scanned node
    pub node: NodeName,
    /// Its label
    pub label: Label,
    /// Neighbors in list order, with labels
    pub neighbors: Vec<NeighborLabel>,
    /// Neighbors that share the node's label, in the order they were found
    pub conflicts: Vec<NodeName>,
}

impl NodeCheck {
    /// Whether the node is consistent with every neighbor it was checked against.
    pub fn is_consistent(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Result of validating a coloring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether no violation was found
    pub is_valid: bool,
    /// Violations in detection order
    pub violations: Vec<Violation>,
    /// Per-node scan trace, in graph order
    pub checks: Vec<NodeCheck>,
}

/// Validate a coloring against a graph, stopping at the first conflict per node.
///
/// # Errors
///
/// Returns `ValidateError::MissingLabel` if a graph key or neighbor has no
/// label in `coloring`.
///
/// # Example
///
/// ```
/// use colorcheck::core::coloring::Coloring;
/// use colorcheck::core::graph::AdjacencyGraph;
/// use colorcheck::core::types::{Label, NodeName};
/// use colorcheck::core::validate::validate;
///
/// let a = NodeName::new("A").unwrap();
/// let b = NodeName::new("B").unwrap();
///
/// let mut graph = AdjacencyGraph::new();
/// graph.connect(a.clone(), b.clone());
///
/// let coloring: Coloring = [
///     (a, Label::new("red").unwrap()),
///     (b, Label::new("red").unwrap()),
/// ]
/// .into_iter()
/// .collect();
///
/// let report = validate(&coloring, &graph).unwrap();
/// assert!(!report.is_valid);
/// assert_eq!(report.violations.len(), 2);
/// ```
pub fn validate(
    coloring: &Coloring,
    graph: &AdjacencyGraph,
) -> Result<ValidationReport, ValidateError> {
    validate_with(coloring, graph, ScanMode::FirstConflict)
}

/// Validate a coloring against a graph with an explicit scan mode.
///
/// # Errors
///
/// Same as [`validate`].
pub fn validate_with(
    coloring: &Coloring,
    graph: &AdjacencyGraph,
    mode: ScanMode,
) -> Result<ValidationReport, ValidateError> {
    let mut violations = Vec::new();
    let mut checks = Vec::with_capacity(graph.node_count());

    for (node, neighbors) in graph.iter() {
        let label = label_of(coloring, node)?;

        // Resolve every neighbor before scanning so a missing entry is never
        // hidden behind an earlier conflict.
        let neighbors = neighbors
            .iter()
            .map(|neighbor| {
                label_of(coloring, neighbor).map(|label| NeighborLabel {
                    node: neighbor.clone(),
                    label: label.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut conflicts = Vec::new();
        for neighbor in neighbors.iter().filter(|n| &n.label == label) {
            violations.push(Violation {
                node: node.clone(),
                neighbor: neighbor.node.clone(),
                shared_label: label.clone(),
            });
            conflicts.push(neighbor.node.clone());
            if mode == ScanMode::FirstConflict {
                break;
            }
        }

        checks.push(NodeCheck {
            node: node.clone(),
            label: label.clone(),
            neighbors,
            conflicts,
        });
    }

    Ok(ValidationReport {
        is_valid: violations.is_empty(),
        violations,
        checks,
    })
}

fn label_of<'a>(coloring: &'a Coloring, node: &NodeName) -> Result<&'a Label, ValidateError> {
    coloring
        .label_of(node)
        .ok_or_else(|| ValidateError::MissingLabel { node: node.clone() })
}
