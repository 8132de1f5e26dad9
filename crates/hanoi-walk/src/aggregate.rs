use hanoi_core::errors::{ErrorInfo, HanoiError};
use hanoi_graph::StateCodec;
use serde::{Deserialize, Serialize};

use crate::engine::Simulation;

/// Center-of-mass distribution over the walks recorded in the final round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkStatistics {
    /// Weighted mean center of mass.
    pub mean: f64,
    /// Weighted population standard deviation of the center of mass.
    pub std_dev: f64,
    /// Total weight (unit walks) behind the statistics.
    pub walks: u64,
    /// Number of distinct states carrying weight.
    pub states: usize,
}

/// Weights every state by the inbound multiplicity it gained in the final
/// round and returns the mean and standard deviation of its center of mass.
///
/// Without any final-round weight (no rounds, or a puzzle without legal
/// moves) every walk is still at the start, which is reported with zero
/// spread.
pub fn aggregate(simulation: &Simulation, codec: &StateCodec) -> Result<WalkStatistics, HanoiError> {
    let mut samples = Vec::new();
    let mut walks = 0u64;
    for (index, vertex) in simulation.graph.iter() {
        let position = index.as_usize();
        let current = simulation.final_inbound.get(position).copied().unwrap_or(0);
        let previous = simulation
            .previous_inbound
            .get(position)
            .copied()
            .unwrap_or(0);
        let weight = current.checked_sub(previous).ok_or_else(|| {
            HanoiError::Engine(
                ErrorInfo::new("shrinking-multiplicity", "inbound multiplicity decreased")
                    .with_context("state", vertex.id().as_raw())
                    .with_context("previous", previous)
                    .with_context("current", current),
            )
        })?;
        if weight == 0 {
            continue;
        }
        let center = codec.decode(vertex.id())?.center_of_mass();
        samples.push((center, weight));
        walks += weight;
    }

    if walks != simulation.final_round_walks() {
        return Err(HanoiError::Engine(
            ErrorInfo::new(
                "inconsistent-snapshots",
                "per-state weights disagree with the multiplicity totals",
            )
            .with_context("weights", walks)
            .with_context("totals", simulation.final_round_walks()),
        ));
    }

    if walks == 0 {
        let start = codec.decode(simulation.start)?;
        return Ok(WalkStatistics {
            mean: start.center_of_mass(),
            std_dev: 0.0,
            walks: 0,
            states: 1,
        });
    }

    let total = walks as f64;
    let mean = samples
        .iter()
        .map(|&(center, weight)| center * weight as f64)
        .sum::<f64>()
        / total;
    let variance = samples
        .iter()
        .map(|&(center, weight)| weight as f64 * (center - mean) * (center - mean))
        .sum::<f64>()
        / total;

    Ok(WalkStatistics {
        mean,
        std_dev: variance.max(0.0).sqrt(),
        walks,
        states: samples.len(),
    })
}
