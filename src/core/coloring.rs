//! core::coloring
//!
//! The node → label assignment under test.
//!
//! # Invariants
//!
//! - Each node holds exactly one label; assigning again replaces it
//! - Iteration follows first-assignment order
//! - Deserialization rejects a node listed twice
//!
//! Totality (every node referenced by the graph has a label) is not enforced
//! here. The validator reports a missing entry as
//! [`ValidateError::MissingLabel`](super::validate::ValidateError::MissingLabel).

use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};

use super::ordered::deserialize_entries;
use super::types::{Label, NodeName};

/// An assignment of labels to nodes.
///
/// # Example
///
/// ```
/// use colorcheck::core::coloring::Coloring;
/// use colorcheck::core::types::{Label, NodeName};
///
/// let mut coloring = Coloring::new();
/// let wa = NodeName::new("WA").unwrap();
/// coloring.assign(wa.clone(), Label::new("blue").unwrap());
///
/// assert_eq!(coloring.label_of(&wa).map(Label::as_str), Some("blue"));
/// assert_eq!(coloring.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    entries: Vec<(NodeName, Label)>,
    index: HashMap<NodeName, usize>,
}

impl Coloring {
    /// Create an empty coloring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a label to a node.
    ///
    /// Returns the previous label if the node was already colored.
    pub fn assign(&mut self, node: NodeName, label: Label) -> Option<Label> {
        match self.index.get(&node) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, label)),
            None => {
                self.index.insert(node.clone(), self.entries.len());
                self.entries.push((node, label));
                None
            }
        }
    }

    /// Get the label of a node, if it has one.
    pub fn label_of(&self, node: &NodeName) -> Option<&Label> {
        self.index.get(node).map(|&slot| &self.entries[slot].1)
    }

    /// Check whether a node has a label.
    pub fn contains(&self, node: &NodeName) -> bool {
        self.index.contains_key(node)
    }

    /// Number of colored nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no node is colored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(node, label)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeName, &Label)> {
        self.entries.iter().map(|(node, label)| (node, label))
    }

    /// Summarize the distinct labels used across the coloring.
    pub fn colors_used(&self) -> ColorSummary {
        let distinct: BTreeSet<&Label> = self.entries.iter().map(|(_, label)| label).collect();
        ColorSummary {
            count: distinct.len(),
            labels: distinct.into_iter().cloned().collect(),
        }
    }
}

impl FromIterator<(NodeName, Label)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (NodeName, Label)>>(iter: I) -> Self {
        let mut coloring = Coloring::new();
        for (node, label) in iter {
            coloring.assign(node, label);
        }
        coloring
    }
}

impl Serialize for Coloring {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (node, label) in &self.entries {
            map.serialize_entry(node, label)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Coloring {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(NodeName, Label)> = deserialize_entries(deserializer)?;
        let mut coloring = Coloring::new();
        for (node, label) in entries {
            if coloring.contains(&node) {
                return Err(de::Error::custom(format!("duplicate node '{}'", node)));
            }
            coloring.assign(node, label);
        }
        Ok(coloring)
    }
}

/// The distinct set of labels a coloring uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSummary {
    /// Number of distinct labels
    pub count: usize,
    /// Distinct labels, sorted
    pub labels: Vec<Label>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> NodeName {
        NodeName::new(name).unwrap()
    }

    fn label(name: &str) -> Label {
        Label::new(name).unwrap()
    }

    #[test]
    fn empty_coloring() {
        let coloring = Coloring::new();
        assert!(coloring.is_empty());
        assert_eq!(coloring.colors_used().count, 0);
    }

    #[test]
    fn assign_replaces_in_place() {
        let mut coloring = Coloring::new();
        coloring.assign(node("A"), label("red"));
        coloring.assign(node("B"), label("blue"));

        let previous = coloring.assign(node("A"), label("green"));

        assert_eq!(previous, Some(label("red")));
        assert_eq!(coloring.len(), 2);
        let order: Vec<_> = coloring.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(coloring.label_of(&node("A")), Some(&label("green")));
    }

    #[test]
    fn label_of_unknown_node() {
        let coloring: Coloring = [(node("A"), label("red"))].into_iter().collect();
        assert!(coloring.label_of(&node("Z")).is_none());
        assert!(!coloring.contains(&node("Z")));
    }

    #[test]
    fn colors_used_is_sorted_and_distinct() {
        let coloring: Coloring = [
            (node("A"), label("red")),
            (node("B"), label("blue")),
            (node("C"), label("red")),
        ]
        .into_iter()
        .collect();

        let summary = coloring.colors_used();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.labels, vec![label("blue"), label("red")]);
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let coloring: Coloring = toml::from_str("Z = \"red\"\nA = \"blue\"\nM = \"red\"\n").unwrap();
        let order: Vec<_> = coloring.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["Z", "A", "M"]);
    }

    #[test]
    fn deserialize_rejects_invalid_label() {
        let result: Result<Coloring, _> = toml::from_str("A = \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_duplicate_node() {
        let result: Result<Coloring, _> =
            serde_json::from_str(r#"{"A": "red", "A": "blue", "B": "red"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate node 'A'"));
    }

    #[test]
    fn serializes_as_map() {
        let coloring: Coloring = [(node("B"), label("blue")), (node("A"), label("red"))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&coloring).unwrap();
        assert_eq!(json, r#"{"B":"blue","A":"red"}"#);
    }
}
