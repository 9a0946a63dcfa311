//! CLI command implementations.

pub mod config;
pub mod contact;
pub mod product;
pub mod seed;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Category key: sofa, bed or dining.
    #[arg(long)]
    pub category: Option<String>,

    /// Exact material label.
    #[arg(long)]
    pub material: Option<String>,

    /// Sort order: price_asc, price_desc or name_asc.
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product slug.
    pub slug: String,

    /// Variant choice as Group=Value, repeatable.
    #[arg(short, long = "select")]
    pub select: Vec<String>,

    /// Delivery area.
    #[arg(short, long)]
    pub area: Option<String>,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub message: String,
}

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {
    /// Print SQL statements instead of writing to the store.
    #[arg(long)]
    pub sql: bool,

    /// Seed catalog JSON (default: the bundled catalog).
    #[arg(short, long)]
    pub file: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a value in the config file.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Create storee.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Use defaults without prompting.
        #[arg(short, long)]
        yes: bool,
    },
    /// Validate the configuration.
    Validate,
}
