use hanoi_core::errors::{ErrorInfo, HanoiError};
use hanoi_core::{Configuration, HanoiParams, StateId};

/// Bidirectional mapping between configurations and state identifiers.
///
/// Digit `i` of the base-`B` expansion of an id holds the position of the
/// disk weighing `i + 1`.
#[derive(Debug, Clone, Copy)]
pub struct StateCodec {
    params: HanoiParams,
}

impl StateCodec {
    /// Creates a codec for the given dimensions.
    pub fn new(params: HanoiParams) -> Self {
        Self { params }
    }

    /// Returns the dimensions this codec was built for.
    pub fn params(&self) -> &HanoiParams {
        &self.params
    }

    /// Encodes a configuration as `Σ position[i] · B^i`.
    pub fn encode(&self, config: &Configuration) -> Result<StateId, HanoiError> {
        if config.disks() != self.params.disks() {
            return Err(HanoiError::Codec(
                ErrorInfo::new("disk-count-mismatch", "configuration has the wrong disk count")
                    .with_context("expected", self.params.disks())
                    .with_context("actual", config.disks()),
            ));
        }
        if let Some(&position) = config
            .positions()
            .iter()
            .find(|&&position| position >= self.params.positions())
        {
            return Err(HanoiError::Codec(
                ErrorInfo::new("digit-out-of-range", "position exceeds the stack range")
                    .with_context("position", position)
                    .with_context("positions", self.params.positions()),
            ));
        }
        Ok(self.encode_positions(config.positions()))
    }

    /// Encodes positions already known to lie inside the stack range.
    pub(crate) fn encode_positions(&self, positions: &[usize]) -> StateId {
        let base = self.params.base();
        let raw = positions
            .iter()
            .rev()
            .fold(0u64, |acc, &position| acc * base + position as u64);
        StateId::from_raw(raw)
    }

    /// Decodes an identifier into exactly `N` positions, zero padded.
    ///
    /// Identifiers outside `[0, B^N)`, or whose digits name a position the
    /// puzzle does not have, are internal-consistency faults.
    pub fn decode(&self, id: StateId) -> Result<Configuration, HanoiError> {
        if id.as_raw() >= self.params.state_space() {
            return Err(HanoiError::Codec(
                ErrorInfo::new("id-out-of-range", "state id lies outside the state space")
                    .with_context("id", id.as_raw())
                    .with_context("state_space", self.params.state_space()),
            ));
        }
        let base = self.params.base();
        let mut remaining = id.as_raw();
        let mut positions = Vec::with_capacity(self.params.disks());
        for _ in 0..self.params.disks() {
            positions.push((remaining % base) as usize);
            remaining /= base;
        }
        Configuration::from_positions(&self.params, positions).map_err(|err| {
            HanoiError::Codec(
                ErrorInfo::new("digit-out-of-range", "decoded digit is not a stack position")
                    .with_context("id", id.as_raw())
                    .with_context("cause", err.code()),
            )
        })
    }
}
