//! `netadm oxidized` — configuration backup commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::print_json;
use crate::config::Settings;
use crate::oxidized::OxidizedClient;

#[derive(Args)]
pub struct OxidizedCommand {
    #[command(subcommand)]
    command: OxidizedSubcommand,
}

#[derive(Subcommand)]
enum OxidizedSubcommand {
    /// Devices listed in router.db
    Devices,
    /// Print the last stored configuration of a device
    FetchConfig { name: String },
}

impl OxidizedCommand {
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let client = OxidizedClient::new(settings.oxidized()?);

        match self.command {
            OxidizedSubcommand::Devices => {
                let devices = client.devices()?;
                print_json(&devices)?;
                eprintln!("{} devices", devices.len());
            }
            OxidizedSubcommand::FetchConfig { name } => {
                match client.device_config(&name).await? {
                    Some(config) => println!("{config}"),
                    None => eprintln!("no stored configuration for {name}"),
                }
            }
        }
        Ok(())
    }
}
