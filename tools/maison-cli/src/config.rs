//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display tuning.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Tagline shown on the shop home view.
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_store_name() -> String {
    "Maison".to_string()
}

fn default_tagline() -> String {
    "Discover premium products crafted for your lifestyle".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file. Uses the embedded dataset when
    /// unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Display tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of featured products on the shop home view.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    /// Number of hero images in rotation.
    #[serde(default = "default_hero_count")]
    pub hero_count: usize,

    /// Seconds between hero image changes.
    #[serde(default = "default_hero_interval_secs")]
    pub hero_interval_secs: u64,
}

fn default_featured_count() -> usize {
    6
}

fn default_hero_count() -> usize {
    4
}

fn default_hero_interval_secs() -> u64 {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            featured_count: default_featured_count(),
            hero_count: default_hero_count(),
            hero_interval_secs: default_hero_interval_secs(),
        }
    }
}

/// Generate a default maison.toml config file.
pub fn generate_default_config() -> String {
    r#"# Maison storefront configuration

[store]
name = "Maison"
tagline = "Discover premium products crafted for your lifestyle"

[catalog]
# path = "catalog.json"   # uses the embedded catalog when unset

[display]
featured_count = 6
hero_count = 4
hero_interval_secs = 5
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.store.name, "Maison");
        assert_eq!(config.display.hero_interval_secs, 5);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.display.featured_count, 6);
        assert_eq!(config.display.hero_count, 4);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CliConfig = toml::from_str("[store]\nname = \"Section Eight\"\n").unwrap();
        assert_eq!(config.store.name, "Section Eight");
        assert_eq!(config.display.featured_count, 6);
    }
}
