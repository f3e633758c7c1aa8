//! Exhaustive simple-path enumeration.
//!
//! Depth-first search with an explicit stack of frames rather than
//! recursion, so traversal depth is bounded by the heap and the iterator can
//! be suspended between paths.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::Graph;

/// Enumerate every simple path from `source` to `destination`.
///
/// Paths are yielded lazily in depth-first order, following adjacency
/// insertion order at every branch point. A node sequence is yielded once
/// even when parallel edges realize some of its hops.
///
/// # Examples
///
/// ```
/// use route_server::graph::{Edge, Graph};
/// use route_server::planner::simple_paths;
///
/// let g = Graph::build([Edge::new(1, 2, 5), Edge::new(2, 3, 5), Edge::new(1, 3, 20)]);
/// let paths: Vec<_> = simple_paths(&g, 1, 3).collect();
/// assert_eq!(paths, vec![vec![1, 2, 3], vec![1, 3]]);
/// ```
pub fn simple_paths<N: Copy + Eq + Hash>(
    graph: &Graph<N>,
    source: N,
    destination: N,
) -> SimplePaths<'_, N> {
    SimplePaths::new(graph, source, destination)
}

/// One level of the depth-first search.
#[derive(Debug)]
struct Frame<N> {
    node: N,
    /// Index of the next outgoing edge to try.
    next_edge: usize,
}

/// Lazy iterator over the simple paths between two nodes.
///
/// Not restartable: once exhausted it stays exhausted.
#[derive(Debug)]
pub struct SimplePaths<'g, N> {
    graph: &'g Graph<N>,
    destination: N,
    stack: Vec<Frame<N>>,
    path: Vec<N>,
    visited: HashSet<N>,
    /// The single-node path still to be yielded when source == destination.
    trivial: bool,
    /// Path extensions made so far, including ones reaching the destination.
    explored: usize,
    step_limit: Option<usize>,
    truncated: bool,
}

impl<'g, N: Copy + Eq + Hash> SimplePaths<'g, N> {
    /// Start a traversal from `source`.
    pub fn new(graph: &'g Graph<N>, source: N, destination: N) -> Self {
        let trivial = source == destination;
        let stack = if trivial {
            Vec::new()
        } else {
            vec![Frame {
                node: source,
                next_edge: 0,
            }]
        };

        Self {
            graph,
            destination,
            stack,
            path: vec![source],
            visited: HashSet::from([source]),
            trivial,
            explored: 0,
            step_limit: None,
            truncated: false,
        }
    }

    /// Stop the traversal after `limit` path extensions.
    ///
    /// This bounds the work done even when no path reaches the destination.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Nodes currently on the search path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Number of path extensions made so far.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Whether the step limit ended the traversal before it was complete.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Abandon the traversal; later calls to `next` return `None`.
    fn stop(&mut self) {
        self.truncated = true;
        self.stack.clear();
        self.path.clear();
        self.visited.clear();
    }
}

impl<N: Copy + Eq + Hash> Iterator for SimplePaths<'_, N> {
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.trivial {
            self.trivial = false;
            return Some(self.path.clone());
        }

        let graph = self.graph;
        while let Some(frame) = self.stack.last_mut() {
            let edges = graph.neighbours(&frame.node);

            let Some(&(next, _)) = edges.get(frame.next_edge) else {
                // Exhausted: backtrack.
                self.stack.pop();
                if let Some(node) = self.path.pop() {
                    self.visited.remove(&node);
                }
                continue;
            };

            let idx = frame.next_edge;
            frame.next_edge += 1;

            if self.visited.contains(&next) {
                continue;
            }
            // Parallel edge to a target already explored from this frame.
            if edges[..idx].iter().any(|(target, _)| *target == next) {
                continue;
            }

            if self.step_limit.is_some_and(|limit| self.explored >= limit) {
                self.stop();
                return None;
            }
            self.explored += 1;

            if next == self.destination {
                // Never extend past the destination; just report the path.
                let mut found = Vec::with_capacity(self.path.len() + 1);
                found.extend_from_slice(&self.path);
                found.push(next);
                return Some(found);
            }

            self.path.push(next);
            self.visited.insert(next);
            self.stack.push(Frame {
                node: next,
                next_edge: 0,
            });
        }

        None
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::Edge;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const NODES: u8 = 6;

    fn edges_strategy() -> impl Strategy<Value = Vec<(u8, u8, u32)>> {
        prop::collection::vec((0..NODES, 0..NODES, 1u32..20), 0..18)
    }

    fn build(edges: &[(u8, u8, u32)]) -> Graph<u8> {
        Graph::build(edges.iter().map(|&(f, t, w)| Edge::new(f, t, w)))
    }

    /// Brute force: try every sequence of distinct nodes and keep those whose
    /// consecutive pairs are all edges.
    fn brute_force(edges: &[(u8, u8, u32)], s: u8, d: u8) -> BTreeSet<Vec<u8>> {
        let has_edge = |a: u8, b: u8| edges.iter().any(|&(f, t, _)| f == a && t == b);
        let mut found = BTreeSet::new();
        let mut stack = vec![vec![s]];
        while let Some(p) = stack.pop() {
            let last = *p.last().unwrap();
            if last == d {
                found.insert(p);
                continue;
            }
            for n in 0..NODES {
                if !p.contains(&n) && has_edge(last, n) {
                    let mut q = p.clone();
                    q.push(n);
                    stack.push(q);
                }
            }
        }
        found
    }

    proptest! {
        /// Every yielded path is simple, starts at s and ends at d
        #[test]
        fn paths_are_simple(edges in edges_strategy(), s in 0..NODES, d in 0..NODES) {
            let g = build(&edges);
            for p in simple_paths(&g, s, d) {
                prop_assert_eq!(p.first(), Some(&s));
                prop_assert_eq!(p.last(), Some(&d));
                let distinct: BTreeSet<_> = p.iter().collect();
                prop_assert_eq!(distinct.len(), p.len());
                prop_assert!(g.path_weight(&p).is_some());
            }
        }

        /// The enumeration matches a brute-force search exactly, without repeats
        #[test]
        fn exhaustive_and_unique(edges in edges_strategy(), s in 0..NODES, d in 0..NODES) {
            let g = build(&edges);
            let paths: Vec<_> = simple_paths(&g, s, d).collect();
            let unique: BTreeSet<_> = paths.iter().cloned().collect();
            prop_assert_eq!(unique.len(), paths.len());
            prop_assert_eq!(unique, brute_force(&edges, s, d));
        }

        /// Same edge sequence, same output order
        #[test]
        fn deterministic(edges in edges_strategy(), s in 0..NODES, d in 0..NODES) {
            let g1 = build(&edges);
            let g2 = build(&edges);
            let a: Vec<_> = simple_paths(&g1, s, d).collect();
            let b: Vec<_> = simple_paths(&g2, s, d).collect();
            prop_assert_eq!(a, b);
        }

        /// s == d always yields exactly the single-node path
        #[test]
        fn trivial_path(edges in edges_strategy(), s in 0..NODES) {
            let g = build(&edges);
            let paths: Vec<_> = simple_paths(&g, s, s).collect();
            prop_assert_eq!(paths, vec![vec![s]]);
        }
    }
}
