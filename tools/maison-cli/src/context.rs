//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use maison_commerce::catalog::CatalogStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// The loaded product catalog.
    pub catalog: CatalogStore,
}

impl Context {
    /// Load context from config file and build the catalog.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        let catalog = Self::load_catalog(&config, &cwd)?;
        output.debug(&format!("Catalog loaded: {} products", catalog.len()));

        Ok(Self {
            config,
            output,
            cwd,
            catalog,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["maison.toml", ".maison.toml", "maison.json"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Build the catalog from the configured source.
    fn load_catalog(config: &CliConfig, cwd: &PathBuf) -> Result<CatalogStore> {
        match &config.catalog.path {
            Some(path) => {
                let resolved = if PathBuf::from(path).is_absolute() {
                    PathBuf::from(path)
                } else {
                    cwd.join(path)
                };
                let json = std::fs::read_to_string(&resolved)
                    .with_context(|| format!("Failed to read catalog: {}", resolved.display()))?;
                CatalogStore::from_json(&json)
                    .with_context(|| format!("Invalid catalog file: {}", resolved.display()))
            }
            None => CatalogStore::embedded().context("Embedded catalog failed to load"),
        }
    }

    /// Path the config would be written to by `maison config init`.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join("maison.toml")
    }
}
