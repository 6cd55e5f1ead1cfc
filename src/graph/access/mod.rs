//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so the graph store and its
//! traversals can share mark state without exposing it as part of the public
//! API surface.

pub(crate) mod marks;
