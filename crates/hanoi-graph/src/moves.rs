use hanoi_core::errors::HanoiError;
use hanoi_core::{Configuration, DiskMove, HanoiParams, StateId};

use crate::codec::StateCodec;

/// One legal move together with the configuration it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    /// The disk relocation that was applied.
    pub disk_move: DiskMove,
    /// Configuration after the move.
    pub configuration: Configuration,
    /// Identifier of `configuration`.
    pub id: StateId,
}

/// Computes every configuration reachable with exactly one legal move.
#[derive(Debug, Clone, Copy)]
pub struct MoveEnumerator {
    codec: StateCodec,
}

impl MoveEnumerator {
    /// Creates an enumerator for the given dimensions.
    pub fn new(params: HanoiParams) -> Self {
        Self {
            codec: StateCodec::new(params),
        }
    }

    /// Returns the codec used to label successors.
    pub fn codec(&self) -> &StateCodec {
        &self.codec
    }

    /// Decodes `id` and enumerates its successors.
    pub fn successors_of(&self, id: StateId) -> Result<Vec<Successor>, HanoiError> {
        let config = self.codec.decode(id)?;
        self.successors(&config)
    }

    /// Enumerates the legal single-disk moves out of `config`.
    ///
    /// Disks are scanned lightest first while tracking which positions are
    /// still uncovered. A disk whose position is still uncovered is the top of
    /// its stack; it may step onto any neighbouring position that no lighter
    /// disk has claimed yet. Results are ordered by disk weight, with the move
    /// towards the higher position first.
    pub fn successors(&self, config: &Configuration) -> Result<Vec<Successor>, HanoiError> {
        self.codec.encode(config)?;
        let positions = self.codec.params().positions();
        let mut available = vec![true; positions];
        let mut successors = Vec::new();
        for (index, &position) in config.positions().iter().enumerate() {
            if !available[position] {
                // buried under a lighter disk
                continue;
            }
            available[position] = false;
            let up = position + 1;
            if up < positions && available[up] {
                successors.push(self.successor(config, index + 1, position, up));
            }
            if let Some(down) = position.checked_sub(1) {
                if available[down] {
                    successors.push(self.successor(config, index + 1, position, down));
                }
            }
        }
        Ok(successors)
    }

    fn successor(&self, config: &Configuration, weight: usize, from: usize, to: usize) -> Successor {
        let disk_move = DiskMove { weight, from, to };
        let configuration = config.apply(&disk_move);
        let id = self.codec.encode_positions(configuration.positions());
        Successor {
            disk_move,
            configuration,
            id,
        }
    }
}
