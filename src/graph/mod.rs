//! Fixed-capacity undirected graphs and their connectivity algorithms.
//!
//! Graph code is organized into:
//! - `basic`: the graph store, its edge type, and depth-first traversals
//! - `options`: construction-time edge-insertion policies
//! - `error`: the error type shared by every fallible operation

pub mod basic;
pub mod error;
pub mod options;
pub(crate) mod access;

// Re-export commonly used types from submodules
pub use basic::{Dfs, Edge, FixedGraph};
pub use error::GraphError;
pub use options::{EdgePolicy, EndpointPolicy, GraphOptions};
