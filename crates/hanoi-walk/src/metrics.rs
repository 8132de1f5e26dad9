use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Counters captured at the end of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMetrics {
    /// 1-based round number.
    pub round: usize,
    /// Discovered states after the round.
    pub vertices: usize,
    /// Distinct transitions after the round.
    pub edges: usize,
    /// Size of the explicit frontier handed to the next round.
    pub frontier: usize,
    /// Move enumerations performed during the round.
    pub expansions: usize,
    /// Multiplicity added by the frontier phase.
    pub frontier_increments: u64,
    /// Multiplicity added by the diffusion phase.
    pub diffusion_increments: u64,
    /// Cumulative multiplicity over every edge.
    pub total_multiplicity: u64,
}

/// Collects per-round metrics for CSV export.
#[derive(Debug, Default, Clone)]
pub struct MetricsRecorder {
    rounds: Vec<RoundMetrics>,
}

impl MetricsRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the metrics of a finished round.
    pub fn push(&mut self, metrics: RoundMetrics) {
        self.rounds.push(metrics);
    }

    /// Recorded rounds in order.
    pub fn rounds(&self) -> &[RoundMetrics] {
        &self.rounds
    }

    /// Whether vertex and edge counts never decreased between rounds.
    pub fn growth_is_monotone(&self) -> bool {
        self.rounds
            .windows(2)
            .all(|pair| pair[1].vertices >= pair[0].vertices && pair[1].edges >= pair[0].edges)
    }

    /// Writes the recorded rounds to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        writeln!(
            file,
            "round,vertices,edges,frontier,expansions,frontier_increments,diffusion_increments,total_multiplicity"
        )?;
        for row in &self.rounds {
            writeln!(
                file,
                "{},{},{},{},{},{},{},{}",
                row.round,
                row.vertices,
                row.edges,
                row.frontier,
                row.expansions,
                row.frontier_increments,
                row.diffusion_increments,
                row.total_multiplicity
            )?;
        }
        file.flush()
    }
}
