//! LearnHub CLI - Browse the tutorial catalog from the terminal.
//!
//! Commands:
//! - `learnhub query` - Search, filter, sort and page tutorials
//! - `learnhub categories` - Category overview
//! - `learnhub show` - Tutorial details
//! - `learnhub config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use learnhub_observability::{init_tracing, LogLevel};

use commands::{CategoriesArgs, ConfigArgs, QueryArgs, ShowArgs};

/// LearnHub CLI - Browse the tutorial catalog
#[derive(Parser)]
#[command(name = "learnhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Catalog file path (overrides catalog.path)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort tutorials
    Query(QueryArgs),

    /// Show tutorial counts per category
    Categories(CategoriesArgs),

    /// Show one tutorial in detail
    Show(ShowArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Query(_) => "query",
            Commands::Categories(_) => "categories",
            Commands::Show(_) => "show",
            Commands::Config(_) => "config",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    if let Err(e) = run(cli, &output) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &output::Output) -> Result<()> {
    let ctx = context::Context::load(cli.config.as_deref(), cli.catalog, output.clone())?;

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        ctx.config.logging.level
    };
    init_tracing(level, ctx.config.logging.format)?;

    let logger = ctx
        .logger
        .clone()
        .with_command(cli.command.name())
        .with_min_level(level);
    let ctx = ctx.with_logger(logger);

    ctx.logger
        .debug_builder("command started")
        .field(
            "config",
            ctx.config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(defaults)".to_string()),
        )
        .emit();

    let result = match cli.command {
        Commands::Query(args) => commands::query::run(args, &ctx),
        Commands::Categories(args) => commands::categories::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    ctx.logger
        .debug_builder("command finished")
        .field_bool("ok", result.is_ok())
        .emit();

    result
}
