//! Directed weighted rail graph.
//!
//! The graph is built from a flat collection of edges (one per train link)
//! into an adjacency list keyed by departure node. It is immutable once
//! built, so it can be shared read-only between concurrent searches.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A directed edge with a travel-time weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<N> {
    pub from: N,
    pub to: N,
    pub weight: u32,
}

impl<N> Edge<N> {
    /// Create a new edge.
    pub fn new(from: N, to: N, weight: u32) -> Self {
        Self { from, to, weight }
    }
}

/// Adjacency-list graph over opaque nodes.
///
/// Each node maps to its outgoing `(target, weight)` pairs in insertion
/// order. Parallel edges between the same pair of nodes are all kept.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, Vec<(N, u32)>>,
    node_count: usize,
    edge_count: usize,
}

impl<N: Copy + Eq + Hash> Graph<N> {
    /// Build a graph from a collection of edges.
    ///
    /// No validation is performed: self-loops and zero weights pass through
    /// unchanged. Self-loops are harmless to path search, which never
    /// revisits a node.
    pub fn build<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<N>>,
    {
        let mut adjacency: HashMap<N, Vec<(N, u32)>> = HashMap::new();
        let mut nodes: HashSet<N> = HashSet::new();
        let mut edge_count = 0;

        for edge in edges {
            adjacency
                .entry(edge.from)
                .or_default()
                .push((edge.to, edge.weight));
            nodes.insert(edge.from);
            nodes.insert(edge.to);
            edge_count += 1;
        }

        Self {
            adjacency,
            node_count: nodes.len(),
            edge_count,
        }
    }

    /// Outgoing edges of a node, in insertion order.
    ///
    /// Nodes without outgoing edges (including unknown nodes) have none.
    pub fn neighbours(&self, node: &N) -> &[(N, u32)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct nodes appearing as either end of an edge.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Smallest weight among the edges from `from` to `to`.
    pub fn hop_weight(&self, from: &N, to: &N) -> Option<u32> {
        self.neighbours(from)
            .iter()
            .filter(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
            .min()
    }

    /// Total weight of a path, taking the fastest edge for every hop.
    ///
    /// Returns `None` if some consecutive pair has no edge. A single-node
    /// path weighs zero.
    pub fn path_weight(&self, path: &[N]) -> Option<u32> {
        path.windows(2)
            .map(|hop| self.hop_weight(&hop[0], &hop[1]))
            .try_fold(0u32, |total, weight| Some(total.saturating_add(weight?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(char, char, u32)]) -> Graph<char> {
        Graph::build(edges.iter().map(|&(f, t, w)| Edge::new(f, t, w)))
    }

    #[test]
    fn empty_graph() {
        let g = graph(&[]);
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert!(g.neighbours(&'A').is_empty());
    }

    #[test]
    fn neighbours_in_insertion_order() {
        let g = graph(&[('A', 'B', 9), ('A', 'C', 7), ('A', 'C', 10)]);
        assert_eq!(g.neighbours(&'A'), &[('B', 9), ('C', 7), ('C', 10)]);
    }

    #[test]
    fn sink_nodes_have_no_key_but_are_counted() {
        let g = graph(&[('A', 'B', 1)]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.neighbours(&'B').is_empty());
    }

    #[test]
    fn parallel_edges_preserved() {
        let g = graph(&[('A', 'C', 7), ('A', 'C', 10)]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn hop_weight_takes_minimum() {
        let g = graph(&[('A', 'C', 10), ('A', 'C', 7), ('A', 'B', 9)]);
        assert_eq!(g.hop_weight(&'A', &'C'), Some(7));
        assert_eq!(g.hop_weight(&'A', &'B'), Some(9));
        assert_eq!(g.hop_weight(&'B', &'A'), None);
    }

    #[test]
    fn path_weight() {
        let g = graph(&[('A', 'C', 10), ('A', 'C', 7), ('C', 'B', 6), ('B', 'E', 3)]);
        assert_eq!(g.path_weight(&['A', 'C', 'B', 'E']), Some(16));
        assert_eq!(g.path_weight(&['A']), Some(0));
        assert_eq!(g.path_weight(&['A', 'E']), None);
    }

    #[test]
    fn self_loops_and_zero_weights_pass_through() {
        let g = graph(&[('A', 'A', 0)]);
        assert_eq!(g.neighbours(&'A'), &[('A', 0)]);
        assert_eq!(g.node_count(), 1);
    }
}
