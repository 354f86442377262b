//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.line("");
    ctx.output.line("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);
    ctx.output.kv("resolved", &ctx.catalog_path().display().to_string());

    ctx.output.line("");
    ctx.output.line("[query]");
    ctx.output.kv("page_size", &ctx.config.query.page_size.to_string());
    ctx.output.kv("sort", &ctx.config.query.sort);

    ctx.output.line("");
    ctx.output.line("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_directive());
    ctx.output.kv("format", ctx.config.logging.format.as_str());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("learnhub.toml");

    if config_path.exists() && !force {
        if !ctx.output.is_interactive() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.output.info("Keeping existing config.");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();
    let mut warnings: Vec<String> = Vec::new();

    let catalog = ctx.catalog_path();
    if !catalog.exists() {
        warnings.push(format!("catalog file not found: {}", catalog.display()));
    }
    if ctx.config_path.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
