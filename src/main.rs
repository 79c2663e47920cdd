use std::io;

use anyhow::Result;
use clap::Parser;
use fare_sniper::{Cli, run_app};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load, build, serve
    let stdin = io::stdin();
    run_app(&args, stdin.lock(), io::stdout())
}
