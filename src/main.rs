//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `feed_loader` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use feed_loader::initialization::init_logger_with;
use feed_loader::{run_load, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_load(config).await {
        Ok(report) => {
            for item in &report.items {
                println!(
                    "{}\t{}\t{}\t{}",
                    item.id(),
                    item.image_url(),
                    item.location().unwrap_or("-"),
                    item.description().unwrap_or("-"),
                );
            }
            println!(
                "✅ Loaded {} item{} from {} in {:.1}s",
                report.items.len(),
                if report.items.len() == 1 { "" } else { "s" },
                report.url,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("feed_loader error: {:#}", e);
            process::exit(1);
        }
    }
}
