#![deny(missing_docs)]
#![doc = "Core parameters, configurations, errors and seeding for the weighted Tower-of-Hanoi walk engine."]

pub mod errors;
pub mod params;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, HanoiError};
pub use params::{EncodingBase, HanoiParams, MAX_DISKS};
pub use provenance::{params_hash, RunProvenance, SchemaVersion};
pub use rng::{derive_walk_seed, WalkRng};
pub use types::{Configuration, DiskMove, StateId};
