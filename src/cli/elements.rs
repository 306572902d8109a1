//! `netadm elements` — REST element inventory commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::print_json;
use crate::config::Settings;
use crate::elements::ElementsClient;

#[derive(Args)]
pub struct ElementsCommand {
    #[command(subcommand)]
    command: ElementsSubcommand,
}

#[derive(Subcommand)]
enum ElementsSubcommand {
    /// List all elements
    List,
    /// Show one element
    Show { hostname: String },
    /// Show one element's interfaces
    Interfaces { hostname: String },
}

impl ElementsCommand {
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let mut client = ElementsClient::new(settings.elements()?);

        match self.command {
            ElementsSubcommand::List => {
                let elements = client.elements().await?;
                print_json(elements)?;
                eprintln!("{} elements", elements.len());
            }
            ElementsSubcommand::Show { hostname } => match client.element(&hostname).await? {
                Some(element) => print_json(&element)?,
                None => eprintln!("element {hostname} not found"),
            },
            ElementsSubcommand::Interfaces { hostname } => {
                match client.element_interfaces(&hostname).await? {
                    Some(interfaces) => print_json(&interfaces)?,
                    None => eprintln!("no interfaces for {hostname}"),
                }
            }
        }
        Ok(())
    }
}
