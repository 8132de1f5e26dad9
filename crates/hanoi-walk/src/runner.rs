use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use hanoi_core::errors::HanoiError;
use hanoi_core::{params_hash, HanoiParams, RunProvenance};
use hanoi_graph::{canonical_hash, StateCodec};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::{aggregate, WalkStatistics};
use crate::config::RunConfig;
use crate::engine::{simulate, Simulation};
use crate::manifest::{GraphSummary, RunManifest, SUMMARY_SCHEMA};
use crate::metrics::RoundMetrics;

/// Summary returned to callers after a run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Resolved dimensions and encoding base.
    pub params: HanoiParams,
    /// Number of rounds that were run.
    pub rounds: usize,
    /// Center-of-mass statistics.
    pub statistics: WalkStatistics,
    /// Final graph summary.
    pub graph: GraphSummary,
    /// Per-round counters.
    pub round_metrics: Vec<RoundMetrics>,
    /// Location of the written summary, if an output directory was configured.
    pub summary_path: Option<PathBuf>,
}

/// Validates the configuration, runs the diffusion and aggregates the result.
///
/// Parameters are checked before any graph is built. Outputs are written only
/// when `config.output.run_directory` is set.
pub fn run(config: &RunConfig) -> Result<RunSummary, HanoiError> {
    let params = config.params()?;
    info!(
        disks = params.disks(),
        positions = params.positions(),
        base = params.base(),
        rounds = config.rounds,
        "starting diffusion run"
    );
    let simulation = simulate(params, config.rounds, config.max_frontier)?;
    let codec = StateCodec::new(params);
    let statistics = aggregate(&simulation, &codec)?;
    let graph = graph_summary(&simulation);
    info!(
        mean = statistics.mean,
        std_dev = statistics.std_dev,
        vertices = graph.vertices,
        edges = graph.edges,
        "diffusion run complete"
    );

    let summary_path = match &config.output.run_directory {
        Some(run_dir) => {
            fs::create_dir_all(run_dir)
                .map_err(|err| HanoiError::serde_at("run-dir-mkdir", err, run_dir))?;
            let rounds_path = run_dir.join(&config.output.rounds_file);
            simulation
                .metrics
                .write_csv(&rounds_path)
                .map_err(|err| HanoiError::serde_at("rounds-write", err, &rounds_path))?;
            let manifest = RunManifest {
                schema_version: SUMMARY_SCHEMA,
                config: config.clone(),
                params,
                statistics,
                graph: graph.clone(),
                provenance: provenance(&params, config.rounds, &graph.fingerprint),
                rounds_file: Some(config.output.rounds_file.clone()),
            };
            let summary_path = run_dir.join(&config.output.summary_file);
            manifest.write(&summary_path)?;
            Some(summary_path)
        }
        None => None,
    };

    Ok(RunSummary {
        params,
        rounds: config.rounds,
        statistics,
        graph,
        round_metrics: simulation.metrics.rounds().to_vec(),
        summary_path,
    })
}

fn graph_summary(simulation: &Simulation) -> GraphSummary {
    GraphSummary {
        vertices: simulation.graph.vertex_count(),
        edges: simulation.graph.edge_count(),
        total_multiplicity: simulation.graph.total_multiplicity(),
        final_round_walks: simulation.final_round_walks(),
        out_degree: simulation.graph.out_degree_bounds(),
        fingerprint: canonical_hash(&simulation.graph),
    }
}

fn provenance(params: &HanoiParams, rounds: usize, fingerprint: &str) -> RunProvenance {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    RunProvenance {
        params_hash: params_hash(params, rounds),
        graph_hash: fingerprint.to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
        tool_versions,
    }
}
