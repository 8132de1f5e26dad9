#![deny(missing_docs)]

//! Walk-multiplicity diffusion over the weighted Tower-of-Hanoi state graph.
//!
//! [`run`] is the usual entry point: it validates a [`RunConfig`], drives the
//! [`DiffusionEngine`] for the requested number of rounds, aggregates the
//! center-of-mass distribution of the final round and optionally writes a
//! JSON summary and per-round CSV.

/// Final-round center-of-mass aggregation.
pub mod aggregate;
/// YAML configuration schema and defaults.
pub mod config;
/// Diffusion engine and the `simulate` driver.
pub mod engine;
/// Run summary serialization.
pub mod manifest;
/// Per-round counters and CSV export.
pub mod metrics;
/// Top-level `run` entry point.
pub mod runner;
/// Explicit Monte-Carlo walks.
pub mod sampler;

pub use aggregate::{aggregate, WalkStatistics};
pub use config::{OutputConfig, RunConfig, SamplerConfig};
pub use engine::{simulate, DiffusionEngine, Simulation};
pub use manifest::{GraphSummary, RunManifest};
pub use metrics::{MetricsRecorder, RoundMetrics};
pub use runner::{run, RunSummary};
pub use sampler::{sample, SampleStatistics};
