//! CLI configuration.

use anyhow::{Context, Result};
use learnhub_catalog::search::{SortKey, DEFAULT_PAGE_SIZE};
use learnhub_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Query defaults.
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Problems that would make queries fail or misbehave.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.catalog.path.trim().is_empty() {
            problems.push("catalog.path must not be empty".to_string());
        }
        if self.query.page_size == 0 {
            problems.push("query.page_size must be at least 1".to_string());
        }
        if let Err(e) = self.query.sort.parse::<SortKey>() {
            problems.push(format!("query.sort: {}", e));
        }

        problems
    }
}

/// Where the tutorial catalog lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to the tutorials JSON document, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "data/tutorials.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Defaults applied when the command line leaves a query option out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sort key (newest, popular, rating, duration).
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_sort() -> String {
    SortKey::default().as_str().to_string()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort: default_sort(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default learnhub.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# LearnHub catalog configuration

[catalog]
path = "{path}"

[query]
# Items shown per "load more" step
page_size = {page_size}
# newest | popular | rating | duration
sort = "{sort}"

[logging]
# trace | debug | info | warn | error (LEARNHUB_LOG overrides)
level = "info"
# human | json
format = "human"
"#,
        path = default_catalog_path(),
        page_size = default_page_size(),
        sort = default_sort(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = CliConfig::parse("learnhub.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = CliConfig::parse(
            "learnhub.toml",
            r#"
            [query]
            sort = "rating"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.query.sort, "rating");
        assert_eq!(config.query.page_size, 12);
        assert_eq!(config.catalog.path, "data/tutorials.json");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "learnhub.json",
            r#"{"catalog": {"path": "tutorials.json"}}"#,
        )
        .unwrap();
        assert_eq!(config.catalog.path, "tutorials.json");
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut config = CliConfig::default();
        config.query.page_size = 0;
        config.query.sort = "cheapest".to_string();

        let problems = config.validate();
        assert_eq!(problems.len(), 2);
        assert!(problems[1].contains("cheapest"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learnhub.toml");
        std::fs::write(&path, "[query]\npage_size = 6\n").unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.query.page_size, 6);
        assert!(CliConfig::load("missing/learnhub.toml").is_err());
    }
}
