//! `netadm icinga` — monitoring state commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::cli::print_json;
use crate::config::Settings;
use crate::icinga::{IcingaClient, state_to_str};

#[derive(Args)]
pub struct IcingaCommand {
    #[command(subcommand)]
    command: IcingaSubcommand,

    /// Emit raw JSON instead of one line per object
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum IcingaSubcommand {
    /// Hosts that are down and not acknowledged
    HostsDown,
    /// Services that are not OK and not acknowledged
    ServicesDown,
}

impl IcingaCommand {
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let client = IcingaClient::new(settings.icinga()?)?;

        match self.command {
            IcingaSubcommand::HostsDown => {
                let hosts = client.hosts_down().await?;
                if self.json {
                    print_json(&hosts)?;
                } else {
                    for host in &hosts {
                        println!(
                            "{}  {}  {}  {}",
                            host.last_hard_state_changed,
                            state_to_str(host.state).red(),
                            host.name,
                            host.address
                        );
                    }
                }
                eprintln!("{} hosts down", hosts.len());
            }
            IcingaSubcommand::ServicesDown => {
                let services = client.services_down().await?;
                if self.json {
                    print_json(&services)?;
                } else {
                    for service in &services {
                        println!(
                            "{}  {}  {}!{}  {}",
                            service.last_hard_state_changed,
                            state_to_str(service.state).red(),
                            service.host_name,
                            service.name,
                            service.output
                        );
                    }
                }
                eprintln!("{} services down", services.len());
            }
        }
        Ok(())
    }
}
