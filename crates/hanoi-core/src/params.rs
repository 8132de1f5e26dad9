//! Validated puzzle dimensions threaded through the codec, enumerator and engine.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HanoiError};

/// Largest accepted disk count.
pub const MAX_DISKS: usize = 64;

/// Policy used to pick the positional base of state identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingBase {
    /// One digit per distinct position value (`B = M`).
    #[default]
    Positions,
    /// Legacy identifiers that use the disk count as base (`B = N`).
    ///
    /// Only accepted when `N >= M`, otherwise two configurations could
    /// share an identifier.
    Disks,
    /// Caller supplied base, which must be at least `M`.
    Explicit(u64),
}

/// Dimensions of a single simulation: disks, positions and the id base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanoiParams {
    disks: usize,
    positions: usize,
    base: u64,
    state_space: u64,
}

impl HanoiParams {
    /// Validates the dimensions and resolves the encoding base.
    pub fn new(disks: usize, positions: usize, encoding: EncodingBase) -> Result<Self, HanoiError> {
        if disks < 1 {
            return Err(config_error("invalid-disks", "at least one disk is required")
                .with_context("disks", disks));
        }
        if disks > MAX_DISKS {
            return Err(config_error("invalid-disks", "too many disks")
                .with_context("disks", disks)
                .with_context("max", MAX_DISKS));
        }
        if positions < 1 {
            return Err(
                config_error("invalid-positions", "at least one stack position is required")
                    .with_context("positions", positions),
            );
        }
        let base = match encoding {
            EncodingBase::Positions => positions as u64,
            EncodingBase::Disks => disks as u64,
            EncodingBase::Explicit(base) => base,
        };
        if base < positions as u64 {
            return Err(HanoiError::Config(
                ErrorInfo::new(
                    "base-too-small",
                    "encoding base cannot represent every stack position",
                )
                .with_context("base", base)
                .with_context("positions", positions)
                .with_hint("use the `positions` encoding or an explicit base >= positions"),
            ));
        }
        let state_space = base.checked_pow(disks as u32).ok_or_else(|| {
            config_error("state-space-overflow", "state ids do not fit into 64 bits")
                .with_context("base", base)
                .with_context("disks", disks)
        })?;
        Ok(Self {
            disks,
            positions,
            base,
            state_space,
        })
    }

    /// Convenience constructor using the default `B = M` encoding.
    pub fn with_default_base(disks: usize, positions: usize) -> Result<Self, HanoiError> {
        Self::new(disks, positions, EncodingBase::Positions)
    }

    /// Number of disks `N`.
    pub fn disks(&self) -> usize {
        self.disks
    }

    /// Number of stack positions `M`.
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Positional base `B` of the state identifiers.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Exclusive upper bound `B^N` of valid identifiers.
    pub fn state_space(&self) -> u64 {
        self.state_space
    }

    /// Sum of all disk weights, `N (N + 1) / 2`.
    pub fn total_weight(&self) -> u64 {
        let n = self.disks as u64;
        n * (n + 1) / 2
    }
}

fn config_error(code: &str, message: &str) -> HanoiError {
    HanoiError::Config(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: &str, value: impl ToString) -> HanoiError;
}

impl ContextExt for HanoiError {
    fn with_context(self, key: &str, value: impl ToString) -> HanoiError {
        match self {
            HanoiError::Config(info) => HanoiError::Config(info.with_context(key, value)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_tracks_positions() {
        let params = HanoiParams::with_default_base(3, 5).unwrap();
        assert_eq!(params.base(), 5);
        assert_eq!(params.state_space(), 125);
        assert_eq!(params.total_weight(), 6);
    }

    #[test]
    fn legacy_base_rejected_when_positions_exceed_disks() {
        let err = HanoiParams::new(2, 3, EncodingBase::Disks).unwrap_err();
        assert_eq!(err.code(), "base-too-small");
        assert!(HanoiParams::new(3, 3, EncodingBase::Disks).is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            HanoiParams::with_default_base(0, 3).unwrap_err().code(),
            "invalid-disks"
        );
        assert_eq!(
            HanoiParams::with_default_base(3, 0).unwrap_err().code(),
            "invalid-positions"
        );
    }

    #[test]
    fn single_position_disk_count_is_capped() {
        assert!(HanoiParams::with_default_base(MAX_DISKS, 1).is_ok());
        let err = HanoiParams::with_default_base(4_000_000_000, 1).unwrap_err();
        assert_eq!(err.code(), "invalid-disks");
        assert_eq!(err.info().context.get("max"), Some(&"64".to_string()));
    }

    #[test]
    fn overflowing_state_space_rejected() {
        let err = HanoiParams::with_default_base(64, 3).unwrap_err();
        assert_eq!(err.code(), "state-space-overflow");
    }
}
