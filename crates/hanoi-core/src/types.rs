use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HanoiError};
use crate::params::HanoiParams;

/// Integer identifier of an encoded disk configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(u64);

impl StateId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Position of every disk, indexed by `weight - 1`.
///
/// Disks sharing a position are ordered by weight, lightest on top, so no
/// height is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    positions: Vec<usize>,
}

impl Configuration {
    /// Canonical start: every disk stacked at position zero.
    pub fn canonical_start(params: &HanoiParams) -> Self {
        Self {
            positions: vec![0; params.disks()],
        }
    }

    /// Builds a configuration after checking it against the puzzle dimensions.
    pub fn from_positions(
        params: &HanoiParams,
        positions: Vec<usize>,
    ) -> Result<Self, HanoiError> {
        if positions.len() != params.disks() {
            return Err(HanoiError::Config(
                ErrorInfo::new("disk-count-mismatch", "one position per disk is required")
                    .with_context("expected", params.disks())
                    .with_context("actual", positions.len()),
            ));
        }
        if let Some((index, position)) = positions
            .iter()
            .enumerate()
            .find(|(_, &position)| position >= params.positions())
        {
            return Err(HanoiError::Config(
                ErrorInfo::new("position-out-of-range", "disk sits outside the stack range")
                    .with_context("disk", index + 1)
                    .with_context("position", position)
                    .with_context("positions", params.positions()),
            ));
        }
        Ok(Self { positions })
    }

    /// Number of disks described by the configuration.
    pub fn disks(&self) -> usize {
        self.positions.len()
    }

    /// Positions ordered by disk weight (index 0 holds the lightest disk).
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Position of the disk with the given weight (1-based).
    pub fn position_of(&self, weight: usize) -> Option<usize> {
        weight
            .checked_sub(1)
            .and_then(|index| self.positions.get(index).copied())
    }

    /// Returns a copy with one disk moved.
    pub fn apply(&self, disk_move: &DiskMove) -> Self {
        let mut positions = self.positions.clone();
        if let Some(slot) = disk_move
            .weight
            .checked_sub(1)
            .and_then(|index| positions.get_mut(index))
        {
            *slot = disk_move.to;
        }
        Self { positions }
    }

    /// Weighted center of mass `Σ d·p_d / Σ d`.
    pub fn center_of_mass(&self) -> f64 {
        let (moment, mass) = self.positions.iter().enumerate().fold(
            (0u64, 0u64),
            |(moment, mass), (index, &position)| {
                let weight = index as u64 + 1;
                (moment + weight * position as u64, mass + weight)
            },
        );
        if mass == 0 {
            0.0
        } else {
            moment as f64 / mass as f64
        }
    }
}

/// A single disk relocation between adjacent positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiskMove {
    /// Weight of the moved disk (1-based).
    pub weight: usize,
    /// Source position.
    pub from: usize,
    /// Destination position.
    pub to: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_mass_weights_by_disk() {
        let params = HanoiParams::with_default_base(3, 3).unwrap();
        let config = Configuration::from_positions(&params, vec![0, 1, 2]).unwrap();
        // (1*0 + 2*1 + 3*2) / 6
        assert!((config.center_of_mass() - 8.0 / 6.0).abs() < 1e-12);
        assert_eq!(Configuration::canonical_start(&params).center_of_mass(), 0.0);
    }

    #[test]
    fn from_positions_checks_range() {
        let params = HanoiParams::with_default_base(2, 2).unwrap();
        let err = Configuration::from_positions(&params, vec![0, 2]).unwrap_err();
        assert_eq!(err.code(), "position-out-of-range");
        let err = Configuration::from_positions(&params, vec![0]).unwrap_err();
        assert_eq!(err.code(), "disk-count-mismatch");
    }
}
