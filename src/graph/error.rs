//! Errors reported by graph operations.

/// The error type for graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was added to a graph already holding `capacity` vertices.
    GraphFull {
        /// The fixed capacity of the graph.
        capacity: usize,
    },
    /// A vertex was added that is already a member of the graph.
    VertexExists,
    /// An operation named a vertex that is not a member of the graph.
    UnknownVertex,
    /// An edge joining a vertex to itself was rejected.
    SelfLoop,
    /// An edge that is already present (in either orientation) was rejected.
    DuplicateEdge,
    /// A graph was constructed with capacity zero.
    ZeroCapacity,
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GraphFull { capacity } => {
                write!(f, "graph is full ({capacity} vertices)")
            }
            Self::VertexExists => f.write_str("vertex already exists in graph"),
            Self::UnknownVertex => f.write_str("vertex is not in graph"),
            Self::SelfLoop => f.write_str("edge endpoints are equal"),
            Self::DuplicateEdge => f.write_str("edge already exists in graph"),
            Self::ZeroCapacity => f.write_str("graph capacity must be positive"),
        }
    }
}

impl std::error::Error for GraphError {}
