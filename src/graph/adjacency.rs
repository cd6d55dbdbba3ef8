//! Insertion-ordered weighted adjacency graph
//!
//! This module provides the canonical graph representation: an ordered node
//! list (order of first appearance) plus per-node adjacency maps backed by
//! FxHashMap for O(1) edge lookups during construction.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::MalformedGraphError;

/// A weighted directed graph with a canonical, insertion-ordered node list.
///
/// Nodes are opaque identifiers (`N: Clone + Eq + Hash`) interned to dense
/// `u32` ids in order of first appearance, so identical input always yields
/// identical node ordering and reproducible scores.
///
/// Two input shapes are supported:
/// - [`Graph::from_mapping`] for node → (node → weight) mappings, where a
///   repeated `(source, destination)` pair is last-write-wins;
/// - [`Graph::from_sequence`] for rectangular weight matrices where the
///   row/column position is the node identifier.
///
/// The node universe is the union of all sources and destinations: a node
/// that only ever appears as an edge target still exists, with out-degree 0.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// Canonical node order (first appearance).
    nodes: Vec<N>,
    /// Maps node -> dense id.
    index: FxHashMap<N, u32>,
    /// Adjacency list per node: target id -> edge weight.
    edges: Vec<FxHashMap<u32, f64>>,
}

impl<N: Clone + Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
            edges: Vec::new(),
        }
    }

    /// Build a graph from mapping form: `source -> (destination -> weight)`.
    ///
    /// Nodes are ordered by first appearance (sources in input order,
    /// destinations appended when first referenced). A repeated
    /// `(source, destination)` pair overwrites the earlier weight, since the
    /// input is a mapping.
    pub fn from_mapping<I, E>(rows: I) -> Result<Self, MalformedGraphError>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, f64)>,
    {
        let mut graph = Self::new();

        for (source, targets) in rows {
            let s = graph.get_or_insert(source);
            for (target, weight) in targets {
                let t = graph.get_or_insert(target);
                check_weight(s as usize, t as usize, weight)?;
                graph.set_edge(s, t, weight);
            }
        }

        if graph.nodes.is_empty() {
            return Err(MalformedGraphError::Empty);
        }
        Ok(graph)
    }

    /// Get or create a node, returning its dense id.
    pub fn get_or_insert(&mut self, node: N) -> u32 {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        self.edges.push(FxHashMap::default());
        id
    }

    /// Set the weight of the edge `from -> to`, replacing any earlier value.
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if let Some(adjacency) = self.edges.get_mut(from as usize) {
            adjacency.insert(to, weight);
        }
    }

    /// Add `weight` to the edge `from -> to`, creating it if absent.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if let Some(adjacency) = self.edges.get_mut(from as usize) {
            *adjacency.entry(to).or_insert(0.0) += weight;
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|adjacency| adjacency.len()).sum()
    }

    /// The canonical node list, in first-appearance order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Look up the dense id of a node.
    pub fn index_of(&self, node: &N) -> Option<u32> {
        self.index.get(node).copied()
    }

    /// Weight of the edge `from -> to`, defaulting to 0 for unspecified pairs.
    pub fn weight(&self, from: u32, to: u32) -> f64 {
        self.edges
            .get(from as usize)
            .and_then(|adjacency| adjacency.get(&to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of outgoing weights for a node (0 for dangling nodes).
    pub fn out_weight(&self, from: u32) -> f64 {
        self.edges
            .get(from as usize)
            .map(|adjacency| adjacency.values().sum())
            .unwrap_or(0.0)
    }

    /// Iterate over the outgoing edges of a node as `(target, weight)` pairs.
    ///
    /// Iteration order follows the adjacency map and is unspecified; callers
    /// that need determinism aggregate into a dense row first.
    pub fn outgoing(&self, from: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.edges
            .get(from as usize)
            .into_iter()
            .flat_map(|adjacency| adjacency.iter().map(|(&t, &w)| (t, w)))
    }
}

impl Graph<usize> {
    /// Build a graph from sequence form: a rectangular matrix of weights where
    /// the row index is the source node and the column index the destination.
    ///
    /// All rows must have the same length; a matrix with more columns than
    /// rows defines extra destination-only (dangling) nodes for the surplus
    /// columns. Zero entries are treated as absent edges.
    pub fn from_sequence(rows: &[Vec<f64>]) -> Result<Self, MalformedGraphError> {
        if rows.is_empty() {
            return Err(MalformedGraphError::Empty);
        }

        let width = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MalformedGraphError::RaggedRow {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        let node_count = rows.len().max(width);
        let mut graph = Self::new();
        for i in 0..node_count {
            graph.get_or_insert(i);
        }

        for (i, row) in rows.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                check_weight(i, j, weight)?;
                if weight != 0.0 {
                    graph.set_edge(i as u32, j as u32, weight);
                }
            }
        }

        Ok(graph)
    }
}

/// Reject negative and non-finite edge weights.
///
/// NaN and infinity would otherwise poison row normalization (a NaN total
/// masquerades as a dangling row; an infinite weight divides to NaN scores),
/// so they are caught at construction alongside negatives.
pub(crate) fn check_weight(
    from: usize,
    to: usize,
    weight: f64,
) -> Result<(), MalformedGraphError> {
    if !weight.is_finite() {
        return Err(MalformedGraphError::NonFiniteWeight { from, to, weight });
    }
    if weight < 0.0 {
        return Err(MalformedGraphError::NegativeWeight { from, to, weight });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_canonical() {
        let graph = Graph::from_mapping(vec![
            ("b", vec![("a", 1.0)]),
            ("a", vec![("c", 2.0)]),
        ])
        .unwrap();

        // Sources in input order, destinations appended at first reference.
        assert_eq!(graph.nodes(), &["b", "a", "c"]);
        assert_eq!(graph.index_of(&"c"), Some(2));
    }

    #[test]
    fn test_destination_only_node_is_dangling() {
        let graph = Graph::from_mapping(vec![("a", vec![("b", 1.0)])]).unwrap();

        assert_eq!(graph.node_count(), 2);
        let b = graph.index_of(&"b").unwrap();
        assert_eq!(graph.out_weight(b), 0.0);
        assert_eq!(graph.outgoing(b).count(), 0);
    }

    #[test]
    fn test_duplicate_edge_is_last_write_wins() {
        let graph =
            Graph::from_mapping(vec![("a", vec![("b", 1.0), ("b", 3.0)])]).unwrap();

        let a = graph.index_of(&"a").unwrap();
        let b = graph.index_of(&"b").unwrap();
        assert_eq!(graph.weight(a, b), 3.0);
    }

    #[test]
    fn test_empty_mapping_rejected() {
        let rows: Vec<(&str, Vec<(&str, f64)>)> = Vec::new();
        let err = Graph::from_mapping(rows).unwrap_err();
        assert_eq!(err, MalformedGraphError::Empty);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = Graph::from_mapping(vec![("a", vec![("b", -1.0)])]).unwrap_err();
        assert!(matches!(
            err,
            MalformedGraphError::NegativeWeight { weight, .. } if weight == -1.0
        ));
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Graph::from_mapping(vec![("a", vec![("b", bad)])]).unwrap_err();
            assert!(
                matches!(err, MalformedGraphError::NonFiniteWeight { .. }),
                "weight {bad} was accepted"
            );
        }

        let err = Graph::from_sequence(&[vec![0.0, f64::INFINITY], vec![1.0, 0.0]])
            .unwrap_err();
        assert_eq!(
            err,
            MalformedGraphError::NonFiniteWeight {
                from: 0,
                to: 1,
                weight: f64::INFINITY
            }
        );
    }

    #[test]
    fn test_from_sequence_square() {
        let graph = Graph::from_sequence(&[
            vec![0.0, 1.0, 1.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ])
        .unwrap();

        assert_eq!(graph.nodes(), &[0, 1, 2]);
        assert_eq!(graph.weight(0, 1), 1.0);
        assert_eq!(graph.weight(1, 0), 0.0);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_from_sequence_ragged_rejected() {
        let err = Graph::from_sequence(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            MalformedGraphError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_sequence_wide_matrix_adds_dangling_columns() {
        // Two rows, three columns: node 2 exists but has no outgoing edges.
        let graph =
            Graph::from_sequence(&[vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 0.0]]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.out_weight(2), 0.0);
    }

    #[test]
    fn test_from_sequence_empty_rejected() {
        let err = Graph::from_sequence(&[]).unwrap_err();
        assert_eq!(err, MalformedGraphError::Empty);
    }

    #[test]
    fn test_increment_edge_accumulates() {
        let mut graph = Graph::new();
        let a = graph.get_or_insert("a");
        let b = graph.get_or_insert("b");

        graph.increment_edge(a, b, 1.0);
        graph.increment_edge(a, b, 1.0);

        assert_eq!(graph.weight(a, b), 2.0);
        assert_eq!(graph.out_weight(a), 2.0);
    }

    #[test]
    fn test_get_or_insert_dedupes() {
        let mut graph = Graph::new();
        let first = graph.get_or_insert("word");
        let second = graph.get_or_insert("word");

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_self_loop_allowed() {
        let graph =
            Graph::from_mapping(vec![("a", vec![("a", 1.0), ("b", 1.0)])]).unwrap();

        let a = graph.index_of(&"a").unwrap();
        assert_eq!(graph.weight(a, a), 1.0);
    }
}
