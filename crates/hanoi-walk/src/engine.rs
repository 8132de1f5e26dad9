use hanoi_core::errors::{ErrorInfo, HanoiError};
use hanoi_core::{Configuration, HanoiParams, StateId};
use hanoi_graph::{MoveEnumerator, PendingSlot, TransitionGraph, VertexIndex};
use tracing::debug;

use crate::metrics::{MetricsRecorder, RoundMetrics};

/// Round-by-round driver of the walk-multiplicity diffusion.
///
/// Each state is enumerated at most once. After that, walk mass that reaches
/// it is replayed along its known edges through the `pending` /
/// `pending_next` counters instead of being simulated walk by walk.
#[derive(Debug, Clone)]
pub struct DiffusionEngine {
    enumerator: MoveEnumerator,
    graph: TransitionGraph,
    start: StateId,
    frontier: Vec<StateId>,
    round: usize,
    max_frontier: Option<usize>,
}

impl DiffusionEngine {
    /// Creates an engine positioned at the canonical start configuration.
    pub fn new(params: HanoiParams) -> Result<Self, HanoiError> {
        let enumerator = MoveEnumerator::new(params);
        let start = enumerator
            .codec()
            .encode(&Configuration::canonical_start(&params))?;
        let mut graph = TransitionGraph::new(params);
        graph.ensure_vertex(start);
        Ok(Self {
            enumerator,
            graph,
            start,
            frontier: vec![start],
            round: 0,
            max_frontier: None,
        })
    }

    /// Aborts the run once the explicit frontier would exceed `limit` entries.
    pub fn with_frontier_limit(mut self, limit: Option<usize>) -> Self {
        self.max_frontier = limit;
        self
    }

    /// Graph built so far.
    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    /// States reached by explicit walks that the next round will advance.
    pub fn frontier(&self) -> &[StateId] {
        &self.frontier
    }

    /// Identifier of the canonical start configuration.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Number of completed rounds.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Enumerator shared with callers that need to decode or expand states.
    pub fn enumerator(&self) -> &MoveEnumerator {
        &self.enumerator
    }

    /// Consumes the engine and returns its graph.
    pub fn into_graph(self) -> TransitionGraph {
        self.graph
    }

    /// Runs one round: the diffusion pass followed by the frontier pass.
    pub fn step(&mut self) -> Result<RoundMetrics, HanoiError> {
        let diffusion_increments = self.diffuse()?;
        let (expansions, frontier_increments) = self.advance_frontier()?;
        self.round += 1;
        let metrics = RoundMetrics {
            round: self.round,
            vertices: self.graph.vertex_count(),
            edges: self.graph.edge_count(),
            frontier: self.frontier.len(),
            expansions,
            frontier_increments,
            diffusion_increments,
            total_multiplicity: self.graph.total_multiplicity(),
        };
        debug!(
            round = metrics.round,
            vertices = metrics.vertices,
            edges = metrics.edges,
            frontier = metrics.frontier,
            total = metrics.total_multiplicity,
            "round complete"
        );
        Ok(metrics)
    }

    /// Drain-then-refill pass over every known vertex in discovery order.
    ///
    /// Staged units written by a vertex are visible to later vertices of the
    /// same pass, which makes the visiting order part of the result.
    fn diffuse(&mut self) -> Result<u64, HanoiError> {
        let mut increments = 0;
        for position in 0..self.graph.vertex_count() {
            let index = VertexIndex::new(position);
            if self.graph.vertex(index)?.pending() > 0 {
                increments += self.graph.propagate(index, PendingSlot::Next)?;
                self.graph.consume_pending(index)?;
            } else {
                self.graph.refill_pending(index)?;
            }
        }
        Ok(increments)
    }

    /// Moves every explicit walk one step.
    ///
    /// A walk sitting on an expanded state hands its future to diffusion and
    /// leaves the frontier; a walk on a fresh state triggers enumeration and
    /// continues along every discovered move.
    fn advance_frontier(&mut self) -> Result<(usize, u64), HanoiError> {
        let frontier = std::mem::take(&mut self.frontier);
        let mut next = Vec::new();
        let mut expansions = 0;
        let mut increments = 0;
        for id in frontier {
            let source = self.graph.ensure_vertex(id);
            if self.graph.vertex(source)?.is_expanded() {
                increments += self.graph.propagate(source, PendingSlot::Current)?;
                continue;
            }
            expansions += 1;
            for successor in self.enumerator.successors_of(id)? {
                let destination = self.graph.ensure_vertex(successor.id);
                self.graph.record_edge(source, destination)?;
                increments += 1;
                next.push(successor.id);
            }
            if let Some(limit) = self.max_frontier {
                if next.len() > limit {
                    return Err(HanoiError::Engine(
                        ErrorInfo::new("frontier-limit", "explicit frontier exceeded its bound")
                            .with_context("limit", limit)
                            .with_context("round", self.round + 1)
                            .with_hint("raise max_frontier or reduce the puzzle size"),
                    ));
                }
            }
        }
        self.frontier = next;
        Ok((expansions, increments))
    }
}

/// Final graph plus the bookkeeping snapshots consumed by the aggregator.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Graph after the last round.
    pub graph: TransitionGraph,
    /// Identifier of the start configuration.
    pub start: StateId,
    /// Number of rounds that were run.
    pub rounds: usize,
    /// Inbound multiplicity per vertex after the next-to-last round.
    pub previous_inbound: Vec<u64>,
    /// Inbound multiplicity per vertex after the last round.
    pub final_inbound: Vec<u64>,
    /// Total multiplicity after the next-to-last round.
    pub previous_total: u64,
    /// Total multiplicity after the last round.
    pub final_total: u64,
    /// Per-round counters.
    pub metrics: MetricsRecorder,
}

impl Simulation {
    /// Number of unit walks recorded purely within the final round.
    pub fn final_round_walks(&self) -> u64 {
        self.final_total - self.previous_total
    }
}

/// Runs `rounds` rounds from the canonical start and snapshots the last two.
pub fn simulate(
    params: HanoiParams,
    rounds: usize,
    max_frontier: Option<usize>,
) -> Result<Simulation, HanoiError> {
    let mut engine = DiffusionEngine::new(params)?.with_frontier_limit(max_frontier);
    let mut metrics = MetricsRecorder::new();
    let mut previous_inbound = Vec::new();
    let mut previous_total = 0;
    for round in 1..=rounds {
        metrics.push(engine.step()?);
        if round + 1 == rounds {
            previous_inbound = engine.graph().inbound_multiplicities();
            previous_total = engine.graph().total_multiplicity();
        }
    }
    let start = engine.start();
    let graph = engine.into_graph();
    let (final_inbound, final_total) = if rounds == 0 {
        (Vec::new(), 0)
    } else {
        (graph.inbound_multiplicities(), graph.total_multiplicity())
    };
    Ok(Simulation {
        graph,
        start,
        rounds,
        previous_inbound,
        final_inbound,
        previous_total,
        final_total,
        metrics,
    })
}
