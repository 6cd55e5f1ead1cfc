//! Per-vertex mark flags for graph traversals.
//!
//! Marks are keyed by vertex value rather than by position, so a lookup never
//! goes through a stale index. The key set doubles as the graph's vertex
//! membership index: exactly one slot exists per stored vertex.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::GraphError;

#[derive(Debug, Clone)]
pub(crate) struct Marks<V> {
    flags: HashMap<V, bool>,
}

impl<V: Eq + Hash> Marks<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            flags: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    #[inline]
    pub(crate) fn contains(&self, vertex: &V) -> bool {
        self.flags.contains_key(vertex)
    }

    /// Adds an unmarked slot for `vertex`. The caller guarantees it is new.
    pub(crate) fn insert(&mut self, vertex: V) {
        self.flags.insert(vertex, false);
    }

    pub(crate) fn clear(&mut self) {
        for flag in self.flags.values_mut() {
            *flag = false;
        }
    }

    pub(crate) fn mark(&mut self, vertex: &V) -> Result<(), GraphError> {
        let flag = self.flags.get_mut(vertex).ok_or(GraphError::UnknownVertex)?;
        *flag = true;
        Ok(())
    }

    pub(crate) fn is_marked(&self, vertex: &V) -> Result<bool, GraphError> {
        self.flags.get(vertex).copied().ok_or(GraphError::UnknownVertex)
    }

    /// Returns `Some(true)` iff this call marked a previously unmarked vertex,
    /// `Some(false)` if it was already marked, `None` if it has no slot.
    #[inline]
    pub(crate) fn try_mark(&mut self, vertex: &V) -> Option<bool> {
        self.flags.get_mut(vertex).map(|flag| !core::mem::replace(flag, true))
    }
}
