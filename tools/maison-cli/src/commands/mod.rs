//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod search;
pub mod shop;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Show only the first N products (the featured slice).
    #[arg(short, long)]
    pub featured: Option<usize>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// The search query. An empty query lists everything.
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {}

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
    /// Set a config value.
    Set {
        /// Config key (dot-separated, e.g. store.name).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new maison.toml config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
