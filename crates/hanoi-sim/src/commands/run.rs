use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use hanoi_walk::{run as run_diffusion, RunConfig};

use super::EncodingArgs;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML configuration; flags below override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of disks.
    #[arg(long, short = 'n')]
    pub disks: Option<usize>,
    /// Number of stack positions.
    #[arg(long, short = 'm')]
    pub positions: Option<usize>,
    /// Number of rounds.
    #[arg(long, short = 't')]
    pub rounds: Option<usize>,
    #[command(flatten)]
    pub encoding: EncodingArgs,
    /// Abort once the explicit frontier grows past this many entries.
    #[arg(long)]
    pub max_frontier: Option<usize>,
    /// Output directory for `summary.json` and `rounds.csv`.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Print the full run summary as JSON instead of the one-line report.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let summary = run_diffusion(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Center of Mass is {:.10}, Std is {:.10}",
            summary.statistics.mean, summary.statistics.std_dev
        );
    }
    Ok(())
}

fn resolve_config(args: &RunArgs) -> Result<RunConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(disks) = args.disks {
        config.disks = disks;
    }
    if let Some(positions) = args.positions {
        config.positions = positions;
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    config.encoding = args.encoding.resolve(config.encoding);
    if args.max_frontier.is_some() {
        config.max_frontier = args.max_frontier;
    }
    if let Some(out) = &args.out {
        config.output.run_directory = Some(out.clone());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use hanoi_core::EncodingBase;

    use super::*;

    fn args() -> RunArgs {
        RunArgs {
            config: None,
            disks: None,
            positions: None,
            rounds: None,
            encoding: EncodingArgs::default(),
            max_frontier: None,
            out: None,
            json: false,
        }
    }

    #[test]
    fn flags_override_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.yaml");
        fs::write(&path, "disks: 5\npositions: 4\nrounds: 8\nencoding: disks\n").unwrap();
        let mut args = args();
        args.config = Some(path);
        args.rounds = Some(12);
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.disks, 5);
        assert_eq!(config.positions, 4);
        assert_eq!(config.rounds, 12);
        assert_eq!(config.encoding, EncodingBase::Disks);
    }

    #[test]
    fn defaults_without_config() {
        let config = resolve_config(&args()).unwrap();
        assert_eq!(config, RunConfig::default());
    }
}
