//! # `fixed-graph` - Fixed-Capacity Undirected Graphs
//!
//! A small undirected graph abstract data type for in-memory graphs whose
//! vertex capacity is known ahead of time. Supports vertex and edge
//! insertion, adjacency queries, per-vertex traversal marks, and discovery of
//! connected components by iterative depth-first search.
//!
//! ## Guarantees
//!
//! ### Structural Invariants
//! - **Bounded size**: a graph never holds more vertices than the capacity it
//!   was created with.
//! - **Distinct vertices**: vertex identity is by equality; adding a vertex
//!   twice fails with [`GraphError::VertexExists`].
//! - **Simple edges**: self-loops and parallel edges are never stored,
//!   whichever orientation they are offered in.
//!
//! ### Traversal State
//! - **Keyed marks**: each vertex owns one mark flag, looked up by value.
//!   Asking about a vertex that was never added fails with
//!   [`GraphError::UnknownVertex`] rather than indexing out of bounds.
//! - **Exclusive traversals**: a traversal borrows the graph mutably, so the
//!   borrow checker rules out interleaved traversals on one graph.
//!
//! ## Key Features
//!
//! - **Explicit policies**: [`GraphOptions`] decides whether degenerate edges
//!   are absorbed or rejected, and whether edge endpoints must be vertices
//! - **Ordered results**: components come back in vertex-insertion order,
//!   each as a sorted set
//! - **Bounded stacks**: neighbors are marked when pushed, so the DFS stack
//!   never exceeds the vertex count
//!
//! ## Example
//!
//! ```rust
//! use fixed_graph::FixedGraph;
//! use std::collections::BTreeSet;
//!
//! let mut graph = FixedGraph::new(3);
//! graph.add_vertex('A').unwrap();
//! graph.add_vertex('B').unwrap();
//! graph.add_vertex('C').unwrap();
//! graph.add_edge('A', 'B').unwrap();
//!
//! let components = graph.connected_components();
//! assert_eq!(
//!     components,
//!     vec![BTreeSet::from(['A', 'B']), BTreeSet::from(['C'])]
//! );
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{Dfs, Edge, EdgePolicy, EndpointPolicy, FixedGraph, GraphError, GraphOptions};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // An edge is exactly its two endpoints.
    assert!(mem::size_of::<Edge<u32>>() == 2 * mem::size_of::<u32>());

    // Options are two fieldless enums.
    assert!(mem::size_of::<GraphOptions>() <= 2);
    assert!(mem::size_of::<GraphError>() <= 2 * mem::size_of::<usize>());
};
