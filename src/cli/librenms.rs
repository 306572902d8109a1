//! `netadm librenms` — NMS device management commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::print_json;
use crate::config::Settings;
use crate::librenms::LibrenmsClient;

#[derive(Args)]
pub struct LibrenmsCommand {
    #[command(subcommand)]
    command: LibrenmsSubcommand,
}

#[derive(Subcommand)]
enum LibrenmsSubcommand {
    /// List all monitored devices
    Devices,
    /// Register a device for monitoring
    AddDevice {
        name: String,
        /// Skip the reachability check
        #[arg(long)]
        force: bool,
    },
    /// Remove a device from monitoring
    RemoveDevice { name: String },
}

impl LibrenmsCommand {
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let client = LibrenmsClient::new(settings.librenms()?, &settings.default_domain);

        match self.command {
            LibrenmsSubcommand::Devices => {
                let devices = client.devices().await?;
                print_json(&devices)?;
                eprintln!("{} devices", devices.len());
            }
            LibrenmsSubcommand::AddDevice { name, force } => {
                let response = client.add_device(&name, force).await?;
                print_json(&response)?;
            }
            LibrenmsSubcommand::RemoveDevice { name } => {
                let response = client.remove_device(&name).await?;
                print_json(&response)?;
            }
        }
        Ok(())
    }
}
