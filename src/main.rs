//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `deshortener` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process;

use deshortener::app::{exit_code, init_color, run_resolve, run_trust, EXIT_FAILURE, EXIT_OK};
use deshortener::cli::{Cli, Command};
use deshortener::initialization::init_logger_with;
use deshortener::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from(&cli.global);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    init_color(std::io::stdout().is_terminal());

    match cli.command {
        Command::Resolve(args) => {
            let trust = args.trust_choice();
            match run_resolve(&config, &args.urls, trust).await {
                Ok(summary) => {
                    for report in &summary.reports {
                        println!("{}", report.render(config.output));
                    }
                    for (input, reason) in &summary.rejected {
                        eprintln!("deshortener: skipped {input:?}: {reason}");
                    }
                    let code = exit_code(&summary);
                    if code != EXIT_OK {
                        process::exit(code);
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("deshortener error: {:#}", e);
                    process::exit(EXIT_FAILURE);
                }
            }
        }
        Command::Trust(command) => match run_trust(&config, command).await {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("deshortener error: {:#}", e);
                process::exit(EXIT_FAILURE);
            }
        },
    }
}
