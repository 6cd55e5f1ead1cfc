//! Unordered vertex pairs.
//!
//! An [`Edge`] stores its endpoints in the order they were given, but equality
//! and hashing ignore that order: `Edge::new(a, b) == Edge::new(b, a)`.

use core::hash::{Hash, Hasher};

/// An undirected edge between two vertices.
#[derive(Debug, Clone, Copy)]
pub struct Edge<V> {
    a: V,
    b: V,
}

impl<V> Edge<V> {
    /// Creates an edge joining `a` and `b`.
    pub const fn new(a: V, b: V) -> Self {
        Self { a, b }
    }

    /// Returns both endpoints in insertion order.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.a, &self.b)
    }

    /// Consumes the edge, returning its endpoints in insertion order.
    pub fn into_endpoints(self) -> (V, V) {
        (self.a, self.b)
    }
}

impl<V: PartialEq> Edge<V> {
    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not
    /// incident to this edge.
    pub fn opposite(&self, vertex: &V) -> Option<&V> {
        if self.a == *vertex {
            Some(&self.b)
        } else if self.b == *vertex {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    pub fn is_incident(&self, vertex: &V) -> bool {
        self.a == *vertex || self.b == *vertex
    }

    /// Returns `true` if this edge joins `u` and `v`, in either order.
    pub fn connects(&self, u: &V, v: &V) -> bool {
        (self.a == *u && self.b == *v) || (self.a == *v && self.b == *u)
    }

    /// Returns `true` if both endpoints are equal.
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.a, &other.b)
    }
}

impl<V: Eq> Eq for Edge<V> {}

// Hash the endpoints smallest-first so both orientations agree with `eq`.
impl<V: Ord + Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.a <= self.b {
            self.a.hash(state);
            self.b.hash(state);
        } else {
            self.b.hash(state);
            self.a.hash(state);
        }
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((a, b): (V, V)) -> Self {
        Self::new(a, b)
    }
}
