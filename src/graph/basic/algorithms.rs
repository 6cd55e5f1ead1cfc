//! Depth-first traversal and connected components for `FixedGraph`.
//!
//! Traversals write the graph's own mark state, so they hold the graph
//! mutably for their whole lifetime. Two traversals can never interleave on
//! the same graph.

use std::collections::BTreeSet;
use std::hash::Hash;

use crate::graph::basic::fixed_graph::FixedGraph;
use crate::graph::GraphError;

/// An iterator for Depth-First Search (DFS).
///
/// This iterator yields vertices in discovery order. It uses an explicit
/// `Vec` stack and marks each neighbor when it is pushed, so every vertex is
/// pushed at most once and the stack never outgrows the vertex count.
pub struct Dfs<'g, V> {
    graph: &'g mut FixedGraph<V>,
    stack: Vec<V>,
}

impl<'g, V> Dfs<'g, V>
where
    V: Clone + Eq + Hash,
{
    /// Clears the graph's marks and seeds the stack with `start`.
    ///
    /// `start` is assumed to be a vertex of the graph.
    fn new(graph: &'g mut FixedGraph<V>, start: V) -> Self {
        graph.clear_marks();
        let mut stack = Vec::with_capacity(graph.vertex_count());
        stack.push(start);
        Self { graph, stack }
    }
}

impl<V> Iterator for Dfs<'_, V>
where
    V: Clone + Eq + Hash,
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.graph.visit(&node);
        self.graph.push_unmarked_neighbors(&node, &mut self.stack);
        Some(node)
    }
}

impl<V> FixedGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Starts a depth-first traversal from `start`.
    ///
    /// The graph's marks are cleared first; on completion every vertex
    /// reachable from `start` is marked.
    ///
    /// # Errors
    /// Returns `GraphError::UnknownVertex` if `start` is not in the graph.
    pub fn dfs(&mut self, start: &V) -> Result<Dfs<'_, V>, GraphError> {
        if !self.contains_vertex(start) {
            return Err(GraphError::UnknownVertex);
        }
        Ok(Dfs::new(self, start.clone()))
    }

    /// Returns whether `u` and `v` lie in the same connected component.
    ///
    /// # Errors
    /// Returns `GraphError::UnknownVertex` if either vertex is not in the graph.
    pub fn are_connected(&mut self, u: &V, v: &V) -> Result<bool, GraphError> {
        if !self.contains_vertex(v) {
            return Err(GraphError::UnknownVertex);
        }
        Ok(self.dfs(u)?.any(|node| node == *v))
    }
}

impl<V> FixedGraph<V>
where
    V: Clone + Ord + Hash,
{
    /// Returns every vertex reachable from `start`, including `start` itself.
    ///
    /// # Errors
    /// Returns `GraphError::UnknownVertex` if `start` is not in the graph.
    pub fn dfs_visit(&mut self, start: &V) -> Result<BTreeSet<V>, GraphError> {
        let reached: BTreeSet<V> = self.dfs(start)?.collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(reached = reached.len(), "dfs finished");

        Ok(reached)
    }

    /// Partitions the vertices into connected components.
    ///
    /// Components are returned in the order their first member was added to
    /// the graph. Every vertex appears in exactly one component.
    pub fn connected_components(&mut self) -> Vec<BTreeSet<V>> {
        let order: Vec<V> = self.vertices().cloned().collect();
        let mut components: Vec<BTreeSet<V>> = Vec::new();

        for vertex in order {
            if components.iter().any(|component| component.contains(&vertex)) {
                continue;
            }
            components.push(Dfs::new(self, vertex).collect());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = self.vertex_count(),
            components = components.len(),
            "connected components found"
        );

        components
    }

    /// Returns the number of connected components.
    pub fn component_count(&mut self) -> usize {
        self.connected_components().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(vertices: &[char], edges: &[(char, char)]) -> FixedGraph<char> {
        let mut g = FixedGraph::new(vertices.len().max(1));
        for &v in vertices {
            g.add_vertex(v).unwrap();
        }
        for &(u, v) in edges {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn dfs_yields_discovery_order() {
        // a - b - d
        //  \
        //   c
        let mut g = graph_with(&['a', 'b', 'c', 'd'], &[('a', 'b'), ('a', 'c'), ('b', 'd')]);
        let order: Vec<char> = g.dfs(&'a').unwrap().collect();
        // Neighbors are pushed in edge order, so the last pushed is popped first.
        assert_eq!(order, vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn dfs_marks_reachable_vertices_only() {
        let mut g = graph_with(&['a', 'b', 'c'], &[('a', 'b')]);
        let reached = g.dfs_visit(&'a').unwrap();
        assert_eq!(reached, BTreeSet::from(['a', 'b']));
        assert_eq!(g.is_marked(&'a'), Ok(true));
        assert_eq!(g.is_marked(&'b'), Ok(true));
        assert_eq!(g.is_marked(&'c'), Ok(false));
    }

    #[test]
    fn dfs_clears_stale_marks() {
        let mut g = graph_with(&['a', 'b'], &[]);
        g.mark_vertex(&'b').unwrap();
        let _ = g.dfs_visit(&'a').unwrap();
        assert_eq!(g.is_marked(&'b'), Ok(false));
    }

    #[test]
    fn dfs_from_unknown_vertex_fails() {
        let mut g = graph_with(&['a'], &[]);
        assert!(matches!(g.dfs(&'z'), Err(GraphError::UnknownVertex)));
        assert_eq!(g.dfs_visit(&'z'), Err(GraphError::UnknownVertex));
    }

    #[test]
    fn dfs_handles_cycles() {
        let mut g = graph_with(
            &['a', 'b', 'c', 'd'],
            &[('a', 'b'), ('b', 'c'), ('c', 'a'), ('c', 'd'), ('d', 'a')],
        );
        let order: Vec<char> = g.dfs(&'b').unwrap().collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], 'b');
    }

    #[test]
    fn dangling_endpoints_are_not_traversed() {
        let mut g = graph_with(&['a', 'b'], &[('a', 'x'), ('x', 'b')]);
        assert_eq!(g.dfs_visit(&'a').unwrap(), BTreeSet::from(['a']));
        assert_eq!(g.component_count(), 2);
    }

    #[test]
    fn components_follow_insertion_order() {
        let mut g = graph_with(&['d', 'a', 'c', 'b'], &[('a', 'b')]);
        let components = g.connected_components();
        assert_eq!(
            components,
            vec![
                BTreeSet::from(['d']),
                BTreeSet::from(['a', 'b']),
                BTreeSet::from(['c']),
            ]
        );
    }

    #[test]
    fn components_of_empty_graph() {
        let mut g = FixedGraph::<u8>::new(4);
        assert!(g.connected_components().is_empty());
        assert_eq!(g.component_count(), 0);
    }

    #[test]
    fn are_connected_queries() {
        let mut g = graph_with(&['a', 'b', 'c', 'd'], &[('a', 'b'), ('b', 'c')]);
        assert_eq!(g.are_connected(&'a', &'c'), Ok(true));
        assert_eq!(g.are_connected(&'c', &'a'), Ok(true));
        assert_eq!(g.are_connected(&'a', &'d'), Ok(false));
        assert_eq!(g.are_connected(&'a', &'a'), Ok(true));
        assert_eq!(g.are_connected(&'a', &'z'), Err(GraphError::UnknownVertex));
        assert_eq!(g.are_connected(&'z', &'a'), Err(GraphError::UnknownVertex));
    }
}
