use std::error::Error;

use clap::Args;
use hanoi_core::HanoiParams;
use hanoi_walk::sample;
use tracing::info;

use super::EncodingArgs;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of disks.
    #[arg(long, short = 'n', default_value_t = 3)]
    pub disks: usize,
    /// Number of stack positions.
    #[arg(long, short = 'm', default_value_t = 3)]
    pub positions: usize,
    /// Steps per walk.
    #[arg(long, short = 't', default_value_t = 16)]
    pub rounds: usize,
    /// Number of independent walks.
    #[arg(long, default_value_t = 10_000)]
    pub walks: u64,
    /// Master seed for per-walk streams.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    #[command(flatten)]
    pub encoding: EncodingArgs,
}

pub fn run(args: &SampleArgs) -> Result<(), Box<dyn Error>> {
    let params = HanoiParams::new(
        args.disks,
        args.positions,
        args.encoding.resolve(Default::default()),
    )?;
    info!(walks = args.walks, seed = args.seed, "sampling random walks");
    let stats = sample(params, args.rounds, args.walks, args.seed)?;
    println!(
        "Sampled uniform-walk center of mass is {:.10}, Std is {:.10}",
        stats.mean, stats.std_dev
    );
    if stats.stuck_walks > 0 {
        info!(stuck = stats.stuck_walks, "walks without legal moves");
    }
    Ok(())
}
