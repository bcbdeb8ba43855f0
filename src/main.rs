//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iss_spotter` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use chrono::TimeZone;
use clap::Parser;
use std::process;

use iss_spotter::initialization::init_logger_with;
use iss_spotter::{run_lookup, Config, OutputFormat, OverpassWindow};

/// Renders a pass risetime as a local-time string.
fn format_risetime(pass: &OverpassWindow) -> String {
    match chrono::Local.timestamp_opt(pass.risetime, 0) {
        chrono::LocalResult::Single(datetime) => {
            datetime.format("%a %b %d %Y %H:%M:%S %Z").to_string()
        }
        // Out-of-range or ambiguous epoch values fall back to the raw number
        _ => format!("epoch {}", pass.risetime),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output = config.output.clone();
    match run_lookup(config).await {
        Ok(report) => {
            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report.passes)?);
                }
                OutputFormat::Text => {
                    if report.passes.is_empty() {
                        println!("No upcoming passes found for your location.");
                    }
                    for pass in &report.passes {
                        println!(
                            "Next pass at {} for {} seconds!",
                            format_risetime(pass),
                            pass.duration
                        );
                    }
                    println!(
                        "Found {} upcoming pass{} in {:.1}s",
                        report.passes.len(),
                        if report.passes.len() == 1 { "" } else { "es" },
                        report.elapsed_seconds
                    );
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("iss_spotter error: {:#}", e);
            process::exit(1);
        }
    }
}
