//! Construction-time policies for a [`FixedGraph`](crate::FixedGraph).
//!
//! The defaults reproduce the permissive contract: self-loops and duplicate
//! edges are absorbed, and edge endpoints are not required to be vertices.

/// What `add_edge` does with a self-loop or an already present edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Drop the edge and report `Ok(false)`.
    #[default]
    Absorb,
    /// Fail with `SelfLoop` or `DuplicateEdge`.
    Reject,
}

/// Whether `add_edge` requires both endpoints to be vertices of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointPolicy {
    /// Accept any endpoints. Endpoints that are never added as vertices are
    /// ignored by traversals.
    #[default]
    Permissive,
    /// Fail with `UnknownVertex` when either endpoint is not a vertex.
    RequireVertices,
}

/// Policy flags for edge insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphOptions {
    /// Handling of self-loops and duplicate edges.
    pub edge_policy: EdgePolicy,
    /// Validation of edge endpoints.
    pub endpoint_policy: EndpointPolicy,
}

impl GraphOptions {
    /// Returns the permissive defaults.
    pub const fn new() -> Self {
        Self {
            edge_policy: EdgePolicy::Absorb,
            endpoint_policy: EndpointPolicy::Permissive,
        }
    }

    /// Returns options that reject every degenerate edge.
    pub const fn strict() -> Self {
        Self {
            edge_policy: EdgePolicy::Reject,
            endpoint_policy: EndpointPolicy::RequireVertices,
        }
    }

    /// Sets the edge policy.
    pub const fn with_edge_policy(self, edge_policy: EdgePolicy) -> Self {
        Self { edge_policy, ..self }
    }

    /// Sets the endpoint policy.
    pub const fn with_endpoint_policy(self, endpoint_policy: EndpointPolicy) -> Self {
        Self {
            endpoint_policy,
            ..self
        }
    }
}
