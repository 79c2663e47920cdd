#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Owns the sample and publishes thresholds
pub mod engine;

// Re-export commonly used types
pub use analysis::{Thresholds, build_thresholds, classify};
pub use data::load_fare_records;
pub use domain::{Airport, FareRecord, Season, SeasonChoice, TimeSlot};
pub use engine::FareEngine;
pub use models::{FareQuery, PriceTier, QuantileBand, ThresholdTable, Verdict};
pub use ui::FareSniperApp;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
// CLI argument parsing
use clap::{Parser, Subcommand};

use crate::config::PERSISTENCE;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Historical fare sample (CSV)
    #[arg(long, default_value = PERSISTENCE.sample.default_path)]
    pub data: PathBuf,

    /// Print JSON instead of formatted text (summary and judge commands)
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Run a single command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the price distribution summary
    Summary,
    /// Judge one quoted fare
    Judge {
        /// Departure airport (TPE or NRT); arrival is the other endpoint
        #[arg(long)]
        from: String,
        /// Departure time, 24-hour HH:MM
        #[arg(long)]
        time: String,
        /// peak / off-peak / unknown (or 旺 / 淡 / 不知道)
        #[arg(long, default_value = "unknown")]
        season: String,
        /// Quoted fare in TWD
        #[arg(long)]
        price: String,
    },
}

/// Main application entry point: load the sample and dispatch on the command.
/// This is the public API for the binary to call
pub fn run_app<R: BufRead, W: Write>(args: &Cli, input: R, mut output: W) -> Result<()> {
    let engine = FareEngine::from_csv(&args.data)?;

    match &args.command {
        None => {
            let console = ui::Console::new(input, output);
            FareSniperApp::new(engine, console).run()
        }
        Some(Command::Summary) => {
            let text = match engine.summary() {
                Some(summary) if args.json => serde_json::to_string_pretty(&summary)?,
                Some(summary) => ui::render::render_summary(&summary),
                None => ui::UI_TEXT.empty_sample.to_string(),
            };
            writeln!(output, "{}", text)?;
            Ok(())
        }
        Some(Command::Judge {
            from,
            time,
            season,
            price,
        }) => {
            let query = ui::query_from_args(from, time, season, price)?;
            let verdict = engine.judge(&query);
            writeln!(output, "{}", ui::app::verdict_output(&verdict, args.json)?)?;
            Ok(())
        }
    }
}
