use hanoi_core::errors::{ErrorInfo, HanoiError};
use hanoi_core::{Configuration, HanoiParams, WalkRng};
use hanoi_graph::MoveEnumerator;
use serde::{Deserialize, Serialize};

/// Empirical center-of-mass statistics of explicit random walks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleStatistics {
    /// Mean center of mass after the last step.
    pub mean: f64,
    /// Population standard deviation of the center of mass.
    pub std_dev: f64,
    /// Number of simulated walks.
    pub walks: u64,
    /// Walks that hit a state without legal moves before the last step.
    pub stuck_walks: u64,
}

/// Simulates `walks` independent walks of `rounds` uniformly random legal moves.
pub fn sample(
    params: HanoiParams,
    rounds: usize,
    walks: u64,
    master_seed: u64,
) -> Result<SampleStatistics, HanoiError> {
    if walks == 0 {
        return Err(HanoiError::Config(ErrorInfo::new(
            "no-walks",
            "the sampler needs at least one walk",
        )));
    }
    let enumerator = MoveEnumerator::new(params);
    let start = Configuration::canonical_start(&params);
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    let mut stuck_walks = 0;
    for walk in 0..walks {
        let mut rng = WalkRng::for_walk(master_seed, walk);
        let mut config = start.clone();
        for _ in 0..rounds {
            let mut successors = enumerator.successors(&config)?;
            match rng.choose_index(successors.len()) {
                Some(choice) => config = successors.swap_remove(choice).configuration,
                None => {
                    stuck_walks += 1;
                    break;
                }
            }
        }
        let center = config.center_of_mass();
        sum += center;
        sum_sq += center * center;
    }
    let count = walks as f64;
    let mean = sum / count;
    let variance = (sum_sq / count - mean * mean).max(0.0);
    Ok(SampleStatistics {
        mean,
        std_dev: variance.sqrt(),
        walks,
        stuck_walks,
    })
}
