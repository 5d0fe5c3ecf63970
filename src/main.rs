// src/main.rs

use anyhow::Result;
use clap::Parser;
use jscleanup::cli::Cli;
use jscleanup::config::ConfigBuilder;
use jscleanup::errors::Error;
use jscleanup::output::summary::write_summary;
use jscleanup::run;
use jscleanup::signal::setup_signal_handler;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "jscleanup=debug".parse()?
                } else {
                    "jscleanup=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting jscleanup v{}...", env!("CARGO_PKG_VERSION"));

    // --- Configuration & Execution ---
    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(&cli).and_then(ConfigBuilder::build) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    // --- Error Handling ---
    match run(&config, &token) {
        Ok(summary) => {
            write_summary(&mut std::io::stderr(), &summary)?;
            if summary.has_failures() {
                std::process::exit(1);
            }
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
