//! netadm CLI entry point.
//!
//! Parses arguments, wires up the tracing subscriber (respecting
//! `RUST_LOG` over the `--verbose`/`--quiet` defaults), and dispatches
//! to the subcommand. Errors are printed in red with their full context
//! chain and exit with status 1.

use clap::Parser;
use colored::Colorize;
use netadm::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    if let Err(err) = cli.execute().await {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
