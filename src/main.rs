use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use printarea::{init_logging, replay, Config, Scenario, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "printarea", version)]
#[command(about = "Replay pointer gestures against the print-area rectangle")]
struct Args {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Configuration file (.json or .toml); defaults to the platform config directory
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_or_default().context("failed to load default config")?,
    };

    init_logging(&config.logging)?;
    info!(version = VERSION, build_date = BUILD_DATE, "printarea starting");

    let scenario = Scenario::from_file(&args.scenario)?;
    let completions = replay(&scenario, &config.interaction)?;

    let mut out = std::io::stdout().lock();
    for completion in &completions {
        serde_json::to_writer(&mut out, completion)?;
        writeln!(out)?;
    }

    Ok(())
}
