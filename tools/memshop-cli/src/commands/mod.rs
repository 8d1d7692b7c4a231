//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod order;
pub mod shop;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use memshop_commerce::cart::LineSummary;
use memshop_observability::SessionJournal;

use crate::context::Context;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list one category (gaming, office, server).
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Write the session journal to this file on exit.
    #[arg(long)]
    pub journal: Option<String>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Product id to add; repeat for more units or products.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<u32>,

    /// Contact name.
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Contact phone.
    #[arg(short, long, default_value = "")]
    pub phone: String,

    /// Contact email (optional).
    #[arg(short, long)]
    pub email: Option<String>,

    /// Write the session journal to this file.
    #[arg(long)]
    pub journal: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// File to create (memshop.toml or memshop.json).
        #[arg(long, default_value = "memshop.toml")]
        path: String,
        /// Overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate configuration.
    Validate,
}

/// Write a finished session journal to `path` as JSON.
pub(crate) fn save_journal(journal: SessionJournal, path: &str, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(path);
    let export = journal.finalize();
    let json = export.to_json().context("Failed to serialize session journal")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write journal: {}", path.display()))?;

    ctx.output.debug(&format!(
        "Journal: {} events written to {}",
        export.events.len(),
        path.display()
    ));
    Ok(())
}

/// One cart or order line as "name × quantity = line total".
pub(crate) fn cart_line_label(line: &LineSummary) -> String {
    format!(
        "{} × {} = {}",
        line.name,
        line.quantity,
        line.line_total.display()
    )
}
