//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod query;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the query command.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Case-insensitive text matched against title, description and category.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category id, or "all".
    #[arg(short, long)]
    pub category: Option<String>,

    /// Difficulty label, or "all".
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Sort order: newest, popular, rating, duration.
    #[arg(long)]
    pub sort: Option<String>,

    /// Items per page (default from config).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Number of pages to show.
    #[arg(short, long, default_value_t = 1)]
    pub pages: usize,
}

/// Arguments for the categories command.
#[derive(Args, Debug)]
pub struct CategoriesArgs {}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Item id.
    pub id: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}
