//! Seeded RNG used by the Monte-Carlo walk sampler.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Deterministic RNG handle for explicit random walks.
///
/// Every walk draws from its own `StdRng` seeded with
/// [`derive_walk_seed`], so a sample is reproducible regardless of how many
/// walks ran before it.
#[derive(Debug, Clone)]
pub struct WalkRng {
    rng: StdRng,
}

impl WalkRng {
    /// Creates a handle from a raw seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle assigned to walk `walk` of a sample seeded with `master_seed`.
    pub fn for_walk(master_seed: u64, walk: u64) -> Self {
        Self::from_seed(derive_walk_seed(master_seed, walk))
    }

    /// Picks a uniformly distributed index in `0..len`, or `None` when `len == 0`.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

impl RngCore for WalkRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the seed of a single walk by hashing `(master_seed, walk)` with
/// SipHash-1-3 under fixed zero keys.
pub fn derive_walk_seed(master_seed: u64, walk: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(walk);
    hasher.finish()
}
