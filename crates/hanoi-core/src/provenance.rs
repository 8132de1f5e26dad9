//! Provenance and schema descriptors attached to run summaries.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::params::HanoiParams;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information recorded next to every run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Hash of the puzzle dimensions and round count.
    pub params_hash: String,
    /// Canonical fingerprint of the final transition graph.
    pub graph_hash: String,
    /// RFC 3339 timestamp recording when the summary was produced.
    pub created_at: String,
    /// Version map for the crates involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}

/// Hashes the dimensions, encoding base and round count of a run.
pub fn params_hash(params: &HanoiParams, rounds: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update((params.disks() as u64).to_le_bytes());
    hasher.update((params.positions() as u64).to_le_bytes());
    hasher.update(params.base().to_le_bytes());
    hasher.update((rounds as u64).to_le_bytes());
    format!("{:x}", hasher.finalize())
}
