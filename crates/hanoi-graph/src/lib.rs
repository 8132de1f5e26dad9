#![deny(missing_docs)]

//! State codec, legal-move enumeration and the lazily grown transition
//! multigraph of weighted Tower-of-Hanoi configurations.

mod codec;
mod graph;
mod hash;
mod ids;
mod moves;

pub use codec::StateCodec;
pub use graph::{Edge, EdgeUpdate, OutDegreeBounds, PendingSlot, TransitionGraph, Vertex};
pub use hash::canonical_hash;
pub use ids::VertexIndex;
pub use moves::{MoveEnumerator, Successor};
