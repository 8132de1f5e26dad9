use hanoi_core::errors::{ErrorInfo, HanoiError};
use hanoi_core::{HanoiParams, StateId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ids::VertexIndex;

/// Outgoing transition with its accumulated walk multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Destination vertex.
    pub target: VertexIndex,
    /// Number of walks attributed to this transition so far.
    pub multiplicity: u64,
}

/// A discovered state together with its successors and diffusion counters.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: StateId,
    successors: Vec<Edge>,
    pending: u64,
    pending_next: u64,
}

impl Vertex {
    fn new(id: StateId) -> Self {
        Self {
            id,
            successors: Vec::new(),
            pending: 0,
            pending_next: 0,
        }
    }

    /// Identifier of the state this vertex stands for.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Outgoing edges in discovery order.
    pub fn successors(&self) -> &[Edge] {
        &self.successors
    }

    /// Number of distinct successors recorded so far.
    pub fn distinct_successors(&self) -> usize {
        self.successors.len()
    }

    /// Whether the move enumerator has produced at least one edge for this vertex.
    pub fn is_expanded(&self) -> bool {
        !self.successors.is_empty()
    }

    /// Deferred diffusion units currently being replayed.
    pub fn pending(&self) -> u64 {
        self.pending
    }

    /// Diffusion units collected for the next refill.
    pub fn pending_next(&self) -> u64 {
        self.pending_next
    }

    /// Sum of the multiplicities on every outgoing edge.
    pub fn outgoing_multiplicity(&self) -> u64 {
        self.successors.iter().map(|edge| edge.multiplicity).sum()
    }
}

/// Which diffusion counter a propagation feeds on the destination side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSlot {
    /// Units that start replaying on the destination's next drain.
    Current,
    /// Units staged until the destination's next refill.
    Next,
}

/// Result of [`TransitionGraph::record_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpdate {
    /// A new destination was attached with multiplicity one.
    Created,
    /// An existing edge had its multiplicity incremented.
    Incremented,
}

/// Minimum and maximum out-degree across all vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutDegreeBounds {
    /// Smallest out-degree, `None` for an empty graph.
    pub min: Option<usize>,
    /// Largest out-degree, `None` for an empty graph.
    pub max: Option<usize>,
}

/// Monotonically growing multigraph of discovered states.
///
/// Vertices live in an insertion-ordered arena keyed by state id, so a dense
/// [`VertexIndex`] and a hashed id lookup address the same record. Nothing is
/// ever removed.
#[derive(Debug, Clone)]
pub struct TransitionGraph {
    params: HanoiParams,
    vertices: IndexMap<StateId, Vertex>,
    edge_count: usize,
    total_multiplicity: u64,
}

impl TransitionGraph {
    /// Creates an empty graph for the given dimensions.
    pub fn new(params: HanoiParams) -> Self {
        Self {
            params,
            vertices: IndexMap::new(),
            edge_count: 0,
            total_multiplicity: 0,
        }
    }

    /// Dimensions of the states stored in this graph.
    pub fn params(&self) -> &HanoiParams {
        &self.params
    }

    /// Returns the vertex for `id`, creating an empty one when it is new.
    pub fn ensure_vertex(&mut self, id: StateId) -> VertexIndex {
        let entry = self.vertices.entry(id);
        let index = entry.index();
        entry.or_insert_with(|| Vertex::new(id));
        VertexIndex::new(index)
    }

    /// Looks up the arena index of a known state.
    pub fn index_of(&self, id: StateId) -> Option<VertexIndex> {
        self.vertices.get_index_of(&id).map(VertexIndex::new)
    }

    /// Returns the vertex stored at `index`.
    pub fn vertex(&self, index: VertexIndex) -> Result<&Vertex, HanoiError> {
        self.vertices
            .get_index(index.as_usize())
            .map(|(_, vertex)| vertex)
            .ok_or_else(|| unknown_vertex(index))
    }

    /// Returns the vertex for a state id, if it has been discovered.
    pub fn vertex_by_id(&self, id: StateId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    fn vertex_mut(&mut self, index: VertexIndex) -> Result<&mut Vertex, HanoiError> {
        self.vertices
            .get_index_mut(index.as_usize())
            .map(|(_, vertex)| vertex)
            .ok_or_else(|| unknown_vertex(index))
    }

    /// Whether the move enumerator has already run for `id`.
    pub fn is_expanded(&self, id: StateId) -> bool {
        self.vertices
            .get(&id)
            .map(Vertex::is_expanded)
            .unwrap_or(false)
    }

    /// Attaches `destination` to `source` or bumps the existing edge by one.
    pub fn record_edge(
        &mut self,
        source: VertexIndex,
        destination: VertexIndex,
    ) -> Result<EdgeUpdate, HanoiError> {
        self.vertex(destination)?;
        let vertex = self.vertex_mut(source)?;
        let update = match vertex
            .successors
            .iter_mut()
            .find(|edge| edge.target == destination)
        {
            Some(edge) => {
                edge.multiplicity += 1;
                EdgeUpdate::Incremented
            }
            None => {
                vertex.successors.push(Edge {
                    target: destination,
                    multiplicity: 1,
                });
                EdgeUpdate::Created
            }
        };
        if update == EdgeUpdate::Created {
            self.edge_count += 1;
        }
        self.total_multiplicity += 1;
        Ok(update)
    }

    /// Adds one unit to every outgoing edge of `source` and to the chosen
    /// pending counter of each destination. Returns the number of edges touched.
    pub fn propagate(&mut self, source: VertexIndex, slot: PendingSlot) -> Result<u64, HanoiError> {
        let degree = self.vertex(source)?.successors.len();
        for position in 0..degree {
            let vertex = self.vertex_mut(source)?;
            let edge = &mut vertex.successors[position];
            edge.multiplicity += 1;
            let target = edge.target;
            let destination = self.vertex_mut(target)?;
            match slot {
                PendingSlot::Current => destination.pending += 1,
                PendingSlot::Next => destination.pending_next += 1,
            }
        }
        self.total_multiplicity += degree as u64;
        Ok(degree as u64)
    }

    /// Consumes one replayed diffusion unit of `index`.
    pub fn consume_pending(&mut self, index: VertexIndex) -> Result<(), HanoiError> {
        let vertex = self.vertex_mut(index)?;
        vertex.pending = vertex.pending.saturating_sub(1);
        Ok(())
    }

    /// Moves the staged units of `index` into its replay counter.
    pub fn refill_pending(&mut self, index: VertexIndex) -> Result<(), HanoiError> {
        let vertex = self.vertex_mut(index)?;
        vertex.pending = vertex.pending_next;
        vertex.pending_next = 0;
        Ok(())
    }

    /// Number of discovered states.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct `(source, destination)` pairs.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sum of all edge multiplicities.
    pub fn total_multiplicity(&self) -> u64 {
        self.total_multiplicity
    }

    /// Iterates vertices in discovery order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexIndex, &Vertex)> + '_ {
        self.vertices
            .values()
            .enumerate()
            .map(|(index, vertex)| (VertexIndex::new(index), vertex))
    }

    /// Total multiplicity arriving at each vertex, indexed by discovery order.
    pub fn inbound_multiplicities(&self) -> Vec<u64> {
        let mut inbound = vec![0u64; self.vertices.len()];
        for vertex in self.vertices.values() {
            for edge in &vertex.successors {
                if let Some(slot) = inbound.get_mut(edge.target.as_usize()) {
                    *slot += edge.multiplicity;
                }
            }
        }
        inbound
    }

    /// Out-degree range over all vertices.
    pub fn out_degree_bounds(&self) -> OutDegreeBounds {
        let mut bounds = OutDegreeBounds::default();
        for vertex in self.vertices.values() {
            let degree = vertex.successors.len();
            bounds.min = Some(bounds.min.map(|v| v.min(degree)).unwrap_or(degree));
            bounds.max = Some(bounds.max.map(|v| v.max(degree)).unwrap_or(degree));
        }
        bounds
    }
}

fn unknown_vertex(index: VertexIndex) -> HanoiError {
    HanoiError::Graph(
        ErrorInfo::new("unknown-vertex", "vertex does not exist")
            .with_context("index", index.as_usize()),
    )
}
