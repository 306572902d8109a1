//! `netadm inventory` — SOAP object-tree inventory commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::print_json;
use crate::config::Settings;
use crate::inventory::soap::SoapClient;
use crate::inventory::{ObjectStore, Oid, resolve};

#[derive(Args)]
pub struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Subcommand)]
enum InventorySubcommand {
    /// Resolve all elements with inherited parents and alarm routing
    Elements {
        /// Subtree to enumerate (defaults to the whole tree)
        #[arg(long)]
        oid: Option<Oid>,
    },
    /// Interfaces and addresses of one element
    Interfaces {
        /// Element object identifier
        #[arg(long)]
        oid: Oid,
    },
    /// Fetch one raw object
    Object {
        /// Object identifier
        #[arg(long)]
        oid: Oid,
    },
}

impl InventoryCommand {
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let eapi = &settings.inventory()?.eapi;
        let client = SoapClient::connect(eapi).await?;
        let mut store = ObjectStore::new(Box::new(client.clone()));

        match self.command {
            InventorySubcommand::Elements { oid } => {
                let elements =
                    resolve::resolve_elements(&mut store, oid, &settings.default_domain).await?;
                print_json(&elements)?;
                eprintln!("{} elements", elements.len());
            }
            InventorySubcommand::Interfaces { oid } => {
                let interfaces = resolve::element_interfaces(&mut store, oid).await?;
                print_json(&interfaces)?;
            }
            InventorySubcommand::Object { oid } => match store.get(oid).await? {
                Some(node) => print_json(&*node)?,
                None => eprintln!("object {oid} not found"),
            },
        }

        client.logout().await?;
        Ok(())
    }
}
