//! core::graph
//!
//! Adjacency graph representation and diagnostics.
//!
//! # Architecture
//!
//! The graph maps each node to an ordered list of neighbors. It is
//! conceptually undirected, but each list is stored exactly as given:
//! - Node order is insertion order (document order when loaded from a file)
//! - Neighbor lists keep their order and any duplicates
//! - Symmetry is not enforced; see [`AdjacencyGraph::asymmetric_arcs`]
//!
//! # Invariants
//!
//! - Every node appears at most once as a key
//! - An isolated node maps to an empty list

use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, HashSet};

use super::ordered::deserialize_entries;
use super::types::NodeName;

/// An adjacency graph: node → ordered neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// Nodes in insertion order
    order: Vec<NodeName>,
    /// Neighbor list for each node
    neighbors: HashMap<NodeName, Vec<NodeName>>,
}

impl AdjacencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no neighbors.
    ///
    /// Adding a node that already exists leaves its neighbors untouched.
    pub fn add_node(&mut self, node: NodeName) {
        if !self.neighbors.contains_key(&node) {
            self.order.push(node.clone());
            self.neighbors.insert(node, Vec::new());
        }
    }

    /// Append `to` to the neighbor list of `from`.
    ///
    /// This records a single arc. `to` is not added as a key.
    pub fn add_arc(&mut self, from: NodeName, to: NodeName) {
        self.add_node(from.clone());
        self.neighbors.entry(from).or_default().push(to);
    }

    /// Record an undirected edge as two arcs, adding both nodes as keys.
    ///
    /// # Example
    ///
    /// ```
    /// use colorcheck::core::graph::AdjacencyGraph;
    /// use colorcheck::core::types::NodeName;
    ///
    /// let mut graph = AdjacencyGraph::new();
    /// let wa = NodeName::new("WA").unwrap();
    /// let nt = NodeName::new("NT").unwrap();
    ///
    /// graph.connect(wa.clone(), nt.clone());
    ///
    /// assert_eq!(graph.neighbors(&wa), &[nt.clone()]);
    /// assert_eq!(graph.neighbors(&nt), &[wa]);
    /// assert!(graph.asymmetric_arcs().is_empty());
    /// ```
    pub fn connect(&mut self, a: NodeName, b: NodeName) {
        self.add_arc(a.clone(), b.clone());
        self.add_arc(b, a);
    }

    /// Get the neighbors of a node.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: &NodeName) -> &[NodeName] {
        self.neighbors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether a node is a key of the graph.
    pub fn contains(&self, node: &NodeName) -> bool {
        self.neighbors.contains_key(node)
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeName> {
        self.order.iter()
    }

    /// Iterate over `(node, neighbors)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeName, &[NodeName])> {
        self.order.iter().map(move |node| (node, self.neighbors(node)))
    }

    /// Number of nodes that are keys of the graph.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of undirected edges.
    ///
    /// A symmetric pair of arcs counts once, as does an arc with no reverse.
    /// Repeated arcs between the same pair are not counted again.
    pub fn edge_count(&self) -> usize {
        let mut seen: HashSet<(&NodeName, &NodeName)> = HashSet::new();
        for (node, neighbors) in self.iter() {
            for neighbor in neighbors {
                let pair = if node <= neighbor {
                    (node, neighbor)
                } else {
                    (neighbor, node)
                };
                seen.insert(pair);
            }
        }
        seen.len()
    }

    /// Every node mentioned as a key or a neighbor, once, in first-seen order.
    pub fn referenced_nodes(&self) -> Vec<&NodeName> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for (node, neighbors) in self.iter() {
            for n in std::iter::once(node).chain(neighbors) {
                if seen.insert(n) {
                    result.push(n);
                }
            }
        }
        result
    }

    /// Find arcs `a → b` where `b` does not list `a` back.
    ///
    /// Arcs are returned in scan order. A neighbor that is not a key of the
    /// graph makes every arc into it asymmetric.
    pub fn asymmetric_arcs(&self) -> Vec<(&NodeName, &NodeName)> {
        self.iter()
            .flat_map(|(node, neighbors)| neighbors.iter().map(move |n| (node, n)))
            .filter(|(node, neighbor)| !self.neighbors(neighbor).contains(node))
            .collect()
    }
}

impl Serialize for AdjacencyGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (node, neighbors) in self.iter() {
            map.serialize_entry(node, neighbors)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AdjacencyGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(NodeName, Vec<NodeName>)> = deserialize_entries(deserializer)?;
        let mut graph = AdjacencyGraph::new();
        for (node, neighbors) in entries {
            if graph.contains(&node) {
                return Err(de::Error::custom(format!("duplicate node '{}'", node)));
            }
            graph.add_node(node.clone());
            for neighbor in neighbors {
                graph.add_arc(node.clone(), neighbor);
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> NodeName {
        NodeName::new(name).unwrap()
    }

    /// A - B - C path with symmetric lists.
    fn path_graph() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc(node("A"), node("B"));
        graph.add_arc(node("B"), node("A"));
        graph.add_arc(node("B"), node("C"));
        graph.add_arc(node("C"), node("B"));
        graph
    }

    #[test]
    fn empty_graph() {
        let graph = AdjacencyGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.referenced_nodes().is_empty());
        assert!(graph.asymmetric_arcs().is_empty());
    }

    #[test]
    fn isolated_node_has_no_neighbors() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node(node("T"));
        assert!(graph.contains(&node("T")));
        assert!(graph.neighbors(&node("T")).is_empty());
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let graph = path_graph();
        assert!(graph.neighbors(&node("Z")).is_empty());
        assert!(!graph.contains(&node("Z")));
    }

    #[test]
    fn add_node_keeps_existing_neighbors() {
        let mut graph = path_graph();
        graph.add_node(node("B"));
        assert_eq!(graph.neighbors(&node("B")), &[node("A"), node("C")]);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn nodes_follow_insertion_order() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node(node("Q"));
        graph.add_node(node("A"));
        graph.add_arc(node("M"), node("A"));
        let order: Vec<_> = graph.nodes().map(NodeName::as_str).collect();
        assert_eq!(order, vec!["Q", "A", "M"]);
    }

    #[test]
    fn add_arc_does_not_add_target_key() {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc(node("A"), node("B"));
        assert!(!graph.contains(&node("B")));
        assert_eq!(graph.referenced_nodes(), vec![&node("A"), &node("B")]);
    }

    #[test]
    fn edge_count_counts_pairs_once() {
        let graph = path_graph();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edge_count_includes_one_sided_arcs() {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc(node("A"), node("B"));
        graph.add_node(node("B"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edge_count_ignores_repeated_arcs() {
        let mut graph = path_graph();
        graph.add_arc(node("A"), node("B"));
        graph.add_arc(node("B"), node("A"));

        assert_eq!(graph.neighbors(&node("A")), &[node("B"), node("B")]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn symmetric_graph_has_no_asymmetric_arcs() {
        assert!(path_graph().asymmetric_arcs().is_empty());
    }

    #[test]
    fn detects_missing_reverse_arc() {
        let mut graph = path_graph();
        graph.add_arc(node("A"), node("C"));

        let arcs = graph.asymmetric_arcs();
        assert_eq!(arcs, vec![(&node("A"), &node("C"))]);
    }

    #[test]
    fn arc_into_unknown_node_is_asymmetric() {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc(node("A"), node("B"));
        assert_eq!(graph.asymmetric_arcs(), vec![(&node("A"), &node("B"))]);
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let graph: AdjacencyGraph =
            toml::from_str("C = [\"B\"]\nA = [\"B\"]\nB = [\"C\", \"A\"]\n").unwrap();
        let order: Vec<_> = graph.nodes().map(NodeName::as_str).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
        assert_eq!(graph.neighbors(&node("B")), &[node("C"), node("A")]);
    }

    #[test]
    fn deserialize_empty_list_is_isolated_node() {
        let graph: AdjacencyGraph = toml::from_str("T = []\n").unwrap();
        assert!(graph.contains(&node("T")));
        assert!(graph.neighbors(&node("T")).is_empty());
    }

    #[test]
    fn deserialize_rejects_duplicate_node() {
        let result: Result<AdjacencyGraph, _> =
            serde_json::from_str(r#"{"A": ["B"], "A": ["C"]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate node 'A'"));
    }

    #[test]
    fn serializes_in_order() {
        let graph = path_graph();
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, r#"{"A":["B"],"B":["A","C"],"C":["B"]}"#);
    }
}
