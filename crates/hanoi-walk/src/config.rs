use std::fs;
use std::path::{Path, PathBuf};

use hanoi_core::errors::HanoiError;
use hanoi_core::{EncodingBase, HanoiParams};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a diffusion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of disks `N`.
    #[serde(default = "default_disks")]
    pub disks: usize,
    /// Number of stack positions `M`.
    #[serde(default = "default_positions")]
    pub positions: usize,
    /// Number of rounds `T`.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Positional base used for state identifiers.
    #[serde(default)]
    pub encoding: EncodingBase,
    /// Upper bound on the explicit frontier; `None` disables the guard.
    #[serde(default)]
    pub max_frontier: Option<usize>,
    /// Monte-Carlo sampler settings.
    #[serde(default)]
    pub sampler: SamplerConfig,
    /// Output directory configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_disks() -> usize {
    3
}

fn default_positions() -> usize {
    3
}

fn default_rounds() -> usize {
    16
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            disks: default_disks(),
            positions: default_positions(),
            rounds: default_rounds(),
            encoding: EncodingBase::default(),
            max_frontier: None,
            sampler: SamplerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    /// Loads a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, HanoiError> {
        let contents = fs::read_to_string(path)
            .map_err(|err| HanoiError::serde_at("config-read", err, path))?;
        Self::from_yaml(&contents).map_err(|err| match err {
            HanoiError::Config(info) => {
                HanoiError::Config(info.with_context("path", path.display()))
            }
            other => other,
        })
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, HanoiError> {
        serde_yaml::from_str(contents).map_err(|err| {
            HanoiError::Config(hanoi_core::ErrorInfo::new("config-parse", err.to_string()))
        })
    }

    /// Validates the dimensions and resolves the encoding base.
    pub fn params(&self) -> Result<HanoiParams, HanoiError> {
        HanoiParams::new(self.disks, self.positions, self.encoding)
    }
}

/// Explicit random-walk sampler settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of independent walks to simulate.
    #[serde(default = "default_walks")]
    pub walks: u64,
    /// Master seed from which per-walk seeds are derived.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
}

fn default_walks() -> u64 {
    10_000
}

fn default_master_seed() -> u64 {
    0x0A40_1D15_C5EE_D5EE_u64
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            walks: default_walks(),
            master_seed: default_master_seed(),
        }
    }
}

/// Output directory layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for run artefacts. Nothing is written when unset.
    #[serde(default)]
    pub run_directory: Option<PathBuf>,
    /// Summary filename relative to `run_directory`.
    #[serde(default = "default_summary_filename")]
    pub summary_file: PathBuf,
    /// Per-round metrics filename relative to `run_directory`.
    #[serde(default = "default_rounds_filename")]
    pub rounds_file: PathBuf,
}

fn default_summary_filename() -> PathBuf {
    PathBuf::from("summary.json")
}

fn default_rounds_filename() -> PathBuf {
    PathBuf::from("rounds.csv")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            run_directory: None,
            summary_file: default_summary_filename(),
            rounds_file: default_rounds_filename(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config = RunConfig::from_yaml("disks: 6\npositions: 6\nrounds: 256\n").unwrap();
        assert_eq!(config.disks, 6);
        assert_eq!(config.rounds, 256);
        assert_eq!(config.encoding, EncodingBase::Positions);
        assert_eq!(config.output.summary_file, PathBuf::from("summary.json"));
        assert_eq!(config.sampler.walks, 10_000);
    }

    #[test]
    fn legacy_encoding_parses() {
        let config = RunConfig::from_yaml("encoding: disks\n").unwrap();
        assert_eq!(config.encoding, EncodingBase::Disks);
        assert_eq!(config.params().unwrap().base(), 3);
    }

    #[test]
    fn explicit_base_uses_yaml_tag() {
        let config = RunConfig::from_yaml("positions: 4\nencoding: !explicit 10\n").unwrap();
        assert_eq!(config.encoding, EncodingBase::Explicit(10));
        assert_eq!(config.params().unwrap().state_space(), 1000);
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = RunConfig::from_yaml("disks: [1, 2").unwrap_err();
        assert_eq!(err.code(), "config-parse");
    }
}
