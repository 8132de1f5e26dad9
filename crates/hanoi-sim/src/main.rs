use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    moves::{self, MovesArgs},
    run::{self, RunArgs},
    sample::{self, SampleArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::prelude::*;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "hanoi-sim", about = "Weighted Tower-of-Hanoi walk diffusion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the multiplicity diffusion and report the center-of-mass distribution.
    Run(RunArgs),
    /// List the legal moves out of a single configuration.
    Moves(MovesArgs),
    /// Simulate uniformly random legal-move walks (not the diffusion model).
    Sample(SampleArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> ExitCode {
    init_tracing();
    match dispatch(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Run(args) => run::run(&args),
        Command::Moves(args) => moves::run(&args),
        Command::Sample(args) => sample::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
