//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `deliverability_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report output (colored text or JSON) and the exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use deliverability_check::config::Opt;
use deliverability_check::initialization::init_logger_with;
use deliverability_check::{exit_code, render_json, render_text, run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());

    init_logger_with(config.effective_log_level(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let report = match run(&config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            process::exit(1);
        }
    };

    if config.json {
        let json = render_json(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("{}", render_text(&report, config.verbose));
    }

    process::exit(exit_code(&report, config.min_score));
}
