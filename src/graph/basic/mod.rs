//! Basic graph implementations.
//!
//! This module contains the fixed-capacity graph store together with the
//! traversals that run over it.

pub mod algorithms;
pub mod edge;
pub mod fixed_graph;

pub use algorithms::Dfs;
pub use edge::Edge;
pub use fixed_graph::FixedGraph;
