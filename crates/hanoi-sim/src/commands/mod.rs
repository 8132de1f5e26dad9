use clap::{Args, ValueEnum};
use hanoi_core::EncodingBase;

pub mod moves;
pub mod run;
pub mod sample;
pub mod version;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingKind {
    /// Base equal to the number of positions.
    Positions,
    /// Legacy base equal to the number of disks.
    Disks,
}

/// Flags selecting the base of state identifiers.
#[derive(Args, Debug, Clone, Default)]
pub struct EncodingArgs {
    /// Encoding policy for state identifiers.
    #[arg(long, value_enum)]
    pub encoding: Option<EncodingKind>,
    /// Explicit identifier base; overrides `--encoding`.
    #[arg(long)]
    pub base: Option<u64>,
}

impl EncodingArgs {
    /// Resolves the flags, falling back to `fallback` when none are given.
    pub fn resolve(&self, fallback: EncodingBase) -> EncodingBase {
        match (self.base, self.encoding) {
            (Some(base), _) => EncodingBase::Explicit(base),
            (None, Some(EncodingKind::Positions)) => EncodingBase::Positions,
            (None, Some(EncodingKind::Disks)) => EncodingBase::Disks,
            (None, None) => fallback,
        }
    }
}
