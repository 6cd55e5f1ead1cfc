//! A fixed-capacity undirected graph over caller-chosen vertex values.
//!
//! Vertices are stored in insertion order, which determines the order in
//! which connected components are discovered. Edges are stored once per
//! unordered pair; each endpoint keeps the indices of its incident edges so
//! adjacency reads stay proportional to the vertex degree.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Hashed membership check |
//! | `add_edge` | \(O(\text{degree})\) | Scans incident edges of one endpoint |
//! | `contains_edge` | \(O(\text{degree})\) | Same scan as `add_edge` |
//! | `neighbors` | \(O(\text{degree})\) | Edge-insertion order |
//! | `mark_vertex` / `is_marked` | \(O(1)\) | Keyed by vertex value |
//! | `clear_marks` | \(O(n)\) | |

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::access::marks::Marks;
use crate::graph::basic::edge::Edge;
use crate::graph::{EdgePolicy, EndpointPolicy, GraphError, GraphOptions};

/// An undirected graph holding at most `capacity` vertices.
///
/// Self-loops and parallel edges are never stored. What happens when one is
/// offered to [`add_edge`](Self::add_edge) depends on the graph's
/// [`GraphOptions`].
#[derive(Debug, Clone)]
pub struct FixedGraph<V> {
    capacity: usize,
    options: GraphOptions,
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
    /// Indices into `edges` of the edges incident to each endpoint.
    incidence: HashMap<V, Vec<usize>>,
    marks: Marks<V>,
}

impl<V> FixedGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Creates an empty graph with room for `capacity` vertices.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_options(capacity, GraphOptions::default())
    }

    /// Creates an empty graph with the given edge-insertion policies.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_options(capacity: usize, options: GraphOptions) -> Self {
        assert!(capacity > 0, "graph capacity must be positive");
        Self {
            capacity,
            options,
            vertices: Vec::with_capacity(capacity),
            edges: Vec::new(),
            incidence: HashMap::with_capacity(capacity),
            marks: Marks::with_capacity(capacity),
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    ///
    /// # Errors
    /// Returns `GraphError::ZeroCapacity` if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, GraphError> {
        Self::try_with_options(capacity, GraphOptions::default())
    }

    /// Fallible counterpart of [`with_options`](Self::with_options).
    ///
    /// # Errors
    /// Returns `GraphError::ZeroCapacity` if `capacity` is zero.
    pub fn try_with_options(capacity: usize, options: GraphOptions) -> Result<Self, GraphError> {
        if capacity == 0 {
            return Err(GraphError::ZeroCapacity);
        }
        Ok(Self::with_options(capacity, options))
    }

    /// Returns the maximum number of vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the policies this graph was built with.
    #[inline]
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of stored edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if the graph holds `capacity` vertices.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity
    }

    /// Returns `true` if `vertex` has been added to the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.marks.contains(vertex)
    }

    /// Adds a vertex.
    ///
    /// # Errors
    /// - `GraphError::GraphFull` if the graph already holds `capacity` vertices.
    /// - `GraphError::VertexExists` if `vertex` is already a member.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        if self.is_full() {
            return Err(GraphError::GraphFull {
                capacity: self.capacity,
            });
        }
        if self.marks.contains(&vertex) {
            return Err(GraphError::VertexExists);
        }

        self.marks.insert(vertex.clone());
        self.vertices.push(vertex);
        debug_assert_eq!(self.marks.len(), self.vertices.len());

        #[cfg(feature = "tracing")]
        tracing::trace!(vertices = self.vertices.len(), capacity = self.capacity, "vertex added");

        Ok(())
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Returns `Ok(true)` if the edge was stored and `Ok(false)` if it was a
    /// self-loop or already present and the edge policy absorbed it.
    ///
    /// # Errors
    /// - `GraphError::UnknownVertex` under `EndpointPolicy::RequireVertices`
    ///   when either endpoint is not a vertex.
    /// - `GraphError::SelfLoop` / `GraphError::DuplicateEdge` under
    ///   `EdgePolicy::Reject`.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool, GraphError> {
        if self.options.endpoint_policy == EndpointPolicy::RequireVertices
            && !(self.contains_vertex(&u) && self.contains_vertex(&v))
        {
            return Err(GraphError::UnknownVertex);
        }
        if u == v {
            return self.absorb(GraphError::SelfLoop);
        }
        if self.contains_edge(&u, &v) {
            return self.absorb(GraphError::DuplicateEdge);
        }

        let idx = self.edges.len();
        self.incidence.entry(u.clone()).or_default().push(idx);
        self.incidence.entry(v.clone()).or_default().push(idx);
        self.edges.push(Edge::new(u, v));

        #[cfg(feature = "tracing")]
        tracing::trace!(edges = self.edges.len(), "edge added");

        Ok(true)
    }

    fn absorb(&self, rejection: GraphError) -> Result<bool, GraphError> {
        match self.options.edge_policy {
            EdgePolicy::Absorb => {
                #[cfg(feature = "tracing")]
                tracing::trace!(reason = %rejection, "edge absorbed");
                Ok(false)
            }
            EdgePolicy::Reject => Err(rejection),
        }
    }

    /// Returns `true` if an edge joins `u` and `v`, in either orientation.
    pub fn contains_edge(&self, u: &V, v: &V) -> bool {
        self.incident_edges(u).any(|edge| edge.connects(u, v))
    }

    fn incident_edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a Edge<V>> + Clone + 'a {
        self.incidence
            .get(vertex)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.edges[idx])
    }

    /// Returns the vertices adjacent to `vertex`, one per incident edge, in
    /// edge-insertion order.
    ///
    /// The iterator is `Clone`, so the sequence can be walked more than once.
    /// A vertex with no incident edges, or one that is not in the graph,
    /// yields nothing.
    pub fn neighbors<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a V> + Clone + 'a {
        self.incident_edges(vertex)
            .filter_map(move |edge| edge.opposite(vertex))
    }

    /// Returns the number of edges incident to `vertex`.
    pub fn degree(&self, vertex: &V) -> usize {
        self.incidence.get(vertex).map_or(0, Vec::len)
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + Clone + '_ {
        self.vertices.iter()
    }

    /// Iterates over the stored edges in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge<V>> + Clone + '_ {
        self.edges.iter()
    }

    /// Resets every vertex mark to unmarked.
    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    /// Marks `vertex`.
    ///
    /// # Errors
    /// Returns `GraphError::UnknownVertex` if `vertex` is not in the graph.
    pub fn mark_vertex(&mut self, vertex: &V) -> Result<(), GraphError> {
        self.marks.mark(vertex)
    }

    /// Returns whether `vertex` is marked.
    ///
    /// # Errors
    /// Returns `GraphError::UnknownVertex` if `vertex` is not in the graph.
    pub fn is_marked(&self, vertex: &V) -> Result<bool, GraphError> {
        self.marks.is_marked(vertex)
    }

    /// Marks `vertex` if it is a member. Used when popping from a traversal stack.
    #[inline]
    pub(super) fn visit(&mut self, vertex: &V) {
        let _ = self.marks.try_mark(vertex);
    }

    /// Marks every unmarked neighbor of `vertex` and pushes it onto `stack`.
    ///
    /// Endpoints that are not vertices of the graph have no mark slot and are
    /// skipped.
    pub(super) fn push_unmarked_neighbors(&mut self, vertex: &V, stack: &mut Vec<V>) {
        let Self {
            edges,
            incidence,
            marks,
            ..
        } = self;

        let Some(incident) = incidence.get(vertex) else {
            return;
        };
        for &idx in incident {
            if let Some(next) = edges[idx].opposite(vertex) {
                if marks.try_mark(next) == Some(true) {
                    stack.push(next.clone());
                }
            }
        }
    }
}
