//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use learnhub_catalog::search::CatalogQueryEngine;
use learnhub_observability::{RunId, StructuredLogger};

use crate::config::CliConfig;
use crate::output::Output;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["learnhub.toml", ".learnhub.toml", "learnhub.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Command-level structured logger.
    pub logger: StructuredLogger,
    /// `--catalog` override for `catalog.path`.
    catalog_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        catalog_override: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd, &output) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let logger = StructuredLogger::new(RunId::generate()).with_format(config.logging.format);

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            logger,
            catalog_override,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path, output: &Output) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => output.warn(&format!("Skipping config file: {:#}", e)),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Replace the logger, e.g. once the command name is known.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Catalog path after applying `--catalog`.
    pub fn catalog_path(&self) -> PathBuf {
        let path = self
            .catalog_override
            .as_deref()
            .unwrap_or(&self.config.catalog.path);
        self.resolve_path(path)
    }

    /// Read and decode the catalog document.
    pub fn load_catalog(&self) -> Result<CatalogQueryEngine> {
        let path = self.catalog_path();
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let engine = CatalogQueryEngine::from_json(&text)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

        self.logger
            .debug_builder("catalog loaded")
            .field("path", path.display().to_string())
            .field_u64("items", engine.len() as u64)
            .emit();

        Ok(engine)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
