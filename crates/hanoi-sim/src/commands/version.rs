use std::error::Error;
use std::process::Command;

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including toolchain information.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    rustc: String,
    crates: Vec<String>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let rustc = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| {
            if out.status.success() {
                Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "rustc unavailable".into());
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        rustc,
        crates: vec![
            "hanoi-core".into(),
            "hanoi-graph".into(),
            "hanoi-walk".into(),
        ],
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
