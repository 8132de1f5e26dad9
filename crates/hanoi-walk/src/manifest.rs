use std::fs;
use std::path::{Path, PathBuf};

use hanoi_core::errors::HanoiError;
use hanoi_core::{HanoiParams, RunProvenance, SchemaVersion};
use hanoi_graph::OutDegreeBounds;
use serde::{Deserialize, Serialize};

use crate::aggregate::WalkStatistics;
use crate::config::RunConfig;

/// Schema of `summary.json`.
pub const SUMMARY_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Size and fingerprint of the final transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Discovered states.
    pub vertices: usize,
    /// Distinct transitions.
    pub edges: usize,
    /// Cumulative multiplicity over every edge.
    pub total_multiplicity: u64,
    /// Unit walks recorded within the final round.
    pub final_round_walks: u64,
    /// Out-degree range across vertices.
    pub out_degree: OutDegreeBounds,
    /// Canonical SHA-256 fingerprint.
    pub fingerprint: String,
}

/// Structured summary written next to the per-round metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Schema version of this payload.
    pub schema_version: SchemaVersion,
    /// Configuration used for the run.
    pub config: RunConfig,
    /// Resolved dimensions and encoding base.
    pub params: HanoiParams,
    /// Center-of-mass statistics.
    pub statistics: WalkStatistics,
    /// Final graph summary.
    pub graph: GraphSummary,
    /// Provenance hashes and timestamp.
    pub provenance: RunProvenance,
    /// Per-round metrics file (relative to the run directory).
    pub rounds_file: Option<PathBuf>,
}

impl RunManifest {
    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), HanoiError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| HanoiError::serde_at("manifest-mkdir", err, parent))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| HanoiError::serde_at("manifest-serialize", err, path))?;
        fs::write(path, json).map_err(|err| HanoiError::serde_at("manifest-write", err, path))
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, HanoiError> {
        let contents = fs::read_to_string(path)
            .map_err(|err| HanoiError::serde_at("manifest-read", err, path))?;
        serde_json::from_str(&contents)
            .map_err(|err| HanoiError::serde_at("manifest-parse", err, path))
    }
}
