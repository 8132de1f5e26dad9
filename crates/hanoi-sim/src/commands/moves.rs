use std::error::Error;

use clap::Args;
use hanoi_core::{Configuration, DiskMove, HanoiParams};
use hanoi_graph::MoveEnumerator;
use serde::Serialize;

use super::EncodingArgs;

#[derive(Args, Debug)]
pub struct MovesArgs {
    /// Number of stack positions.
    #[arg(long, short = 'm')]
    pub positions: usize,
    /// Position of every disk, lightest first (e.g. `0,1,2`).
    #[arg(long, value_delimiter = ',', required = true)]
    pub state: Vec<usize>,
    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Debug, Serialize)]
struct MoveListing {
    state: u64,
    center_of_mass: f64,
    moves: Vec<MoveEntry>,
}

#[derive(Debug, Serialize)]
struct MoveEntry {
    disk_move: DiskMove,
    positions: Vec<usize>,
    state: u64,
    center_of_mass: f64,
}

pub fn run(args: &MovesArgs) -> Result<(), Box<dyn Error>> {
    let listing = list_moves(args)?;
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

fn list_moves(args: &MovesArgs) -> Result<MoveListing, Box<dyn Error>> {
    let params = HanoiParams::new(
        args.state.len(),
        args.positions,
        args.encoding.resolve(Default::default()),
    )?;
    let config = Configuration::from_positions(&params, args.state.clone())?;
    let enumerator = MoveEnumerator::new(params);
    let state = enumerator.codec().encode(&config)?;
    let moves = enumerator
        .successors(&config)?
        .into_iter()
        .map(|successor| MoveEntry {
            disk_move: successor.disk_move,
            positions: successor.configuration.positions().to_vec(),
            state: successor.id.as_raw(),
            center_of_mass: successor.configuration.center_of_mass(),
        })
        .collect();
    Ok(MoveListing {
        state: state.as_raw(),
        center_of_mass: config.center_of_mass(),
        moves,
    })
}
