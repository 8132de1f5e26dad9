use serde::{Deserialize, Serialize};

/// Dense arena index of a vertex inside a [`TransitionGraph`](crate::TransitionGraph).
///
/// Indices follow discovery order and stay valid for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexIndex(usize);

impl VertexIndex {
    /// Creates an index from its position in discovery order.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the vertex in discovery order.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}
