//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use duka_commerce::catalog::DEFAULT_RECOMMENDATIONS;
use duka_commerce::cart::CART_KEY;
use duka_data::DEFAULT_CATALOG_PATH;
use duka_storefront::StorefrontSettings;
use serde::{Deserialize, Serialize};

/// Server the catalog path is fetched from unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["duka.toml", ".duka.toml", "duka.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DukaConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Where the cart is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl DukaConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Storefront tunables derived from `[display]`.
    pub fn storefront_settings(&self) -> StorefrontSettings {
        StorefrontSettings {
            toast_duration: Duration::from_millis(self.display.toast_ms),
            recommendation_count: self.display.recommendations,
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL the catalog path is resolved against. Unset only when
    /// `path` is an absolute URL.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Catalog path or absolute URL.
    #[serde(default = "default_catalog_path")]
    pub path: String,

    /// Local JSON file; takes precedence over HTTP when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Request timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_catalog_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_catalog_path(),
            file: None,
            timeout_ms: None,
        }
    }
}

/// Cart storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file, relative to the working directory.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Slot key of the cart.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_path() -> String {
    ".duka/cart.json".to_string()
}

fn default_storage_key() -> String {
    CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_storage_key(),
        }
    }
}

/// Presentation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Toast display time in milliseconds.
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,

    /// Size of the recommendation strip.
    #[serde(default = "default_recommendations")]
    pub recommendations: usize,
}

fn default_toast_ms() -> u64 {
    2500
}

fn default_recommendations() -> usize {
    DEFAULT_RECOMMENDATIONS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            toast_ms: default_toast_ms(),
            recommendations: default_recommendations(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `human` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "human".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Generate a default duka.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Duka storefront configuration

[catalog]
# Server hosting the catalog; `path` is resolved against it.
base_url = "{base_url}"
path = "{path}"
# Load products from a local file instead of over HTTP:
# file = "products.json"
# timeout_ms = 10000

[storage]
path = "{storage}"
key = "{key}"

[display]
toast_ms = {toast_ms}
recommendations = {recommendations}

[log]
level = "{level}"
format = "{format}"
"#,
        base_url = DEFAULT_BASE_URL,
        path = DEFAULT_CATALOG_PATH,
        storage = default_storage_path(),
        key = CART_KEY,
        toast_ms = default_toast_ms(),
        recommendations = DEFAULT_RECOMMENDATIONS,
        level = default_log_level(),
        format = default_log_format(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let config: DukaConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, DukaConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DukaConfig = toml::from_str(
            r#"
[catalog]
file = "products.json"

[display]
toast_ms = 1000
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.file.as_deref(), Some("products.json"));
        assert_eq!(config.catalog.path, "/shayratronics/products.json");
        assert_eq!(config.storage.key, "cart");
        assert_eq!(config.display.recommendations, 5);
        assert_eq!(
            config.storefront_settings().toast_duration,
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duka.json");
        std::fs::write(
            &path,
            r#"{"catalog": {"base_url": "https://shop.example.com"}, "storage": {"key": "basket"}}"#,
        )
        .unwrap();

        let config = DukaConfig::load(&path).unwrap();
        assert_eq!(config.catalog.base_url.as_deref(), Some("https://shop.example.com"));
        assert_eq!(config.storage.key, "basket");
        assert_eq!(config.storage.path, ".duka/cart.json");
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duka.toml");
        std::fs::write(&path, "[display]\ntoast_ms = \"soon\"").unwrap();

        let err = DukaConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
