//! Command-line interface for netadm.
//!
//! One subcommand group per external system, mirroring the operations
//! each client wrapper exposes:
//!
//! ```bash
//! netadm inventory elements           # resolve all elements
//! netadm inventory interfaces --oid 4711
//! netadm elements list
//! netadm icinga hosts-down
//! netadm librenms devices
//! netadm oxidized fetch-config core1
//! ```
//!
//! Global flags: `--config` (also `NETADM_CONFIG`), `--verbose`,
//! `--quiet`. Records are printed as pretty JSON so output can be piped
//! into `jq` in scripts.

mod elements;
mod icinga;
mod inventory;
mod librenms;
mod oxidized;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::constants::DEFAULT_CONFIG_FILE;

/// Top-level CLI for the netadm toolkit.
#[derive(Parser)]
#[command(
    name = "netadm",
    about = "Query network-management systems (inventory, monitoring, NMS, backups)",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the configuration file.
    #[arg(short, long, global = true, env = "NETADM_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// SOAP object-tree inventory
    Inventory(inventory::InventoryCommand),
    /// REST element inventory
    Elements(elements::ElementsCommand),
    /// Icinga2 monitoring
    Icinga(icinga::IcingaCommand),
    /// LibreNMS device management
    Librenms(librenms::LibrenmsCommand),
    /// Oxidized configuration backups
    Oxidized(oxidized::OxidizedCommand),
}

impl Cli {
    /// Default tracing filter directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "netadm=debug"
        } else if self.quiet {
            "error"
        } else {
            "netadm=info"
        }
    }

    /// Load settings and run the selected subcommand.
    pub async fn execute(self) -> Result<()> {
        let path = self.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let settings = Settings::load(&path)
            .with_context(|| format!("cannot load configuration from {}", path.display()))?;

        match self.command {
            Commands::Inventory(cmd) => cmd.execute(&settings).await,
            Commands::Elements(cmd) => cmd.execute(&settings).await,
            Commands::Icinga(cmd) => cmd.execute(&settings).await,
            Commands::Librenms(cmd) => cmd.execute(&settings).await,
            Commands::Oxidized(cmd) => cmd.execute(&settings).await,
        }
    }
}

/// Print any serializable record as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
