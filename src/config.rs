//! Project configuration module.
//!
//! Handles loading and validating `advent.toml` from the project root. Stock
//! defaults describe a standard SvelteKit layout, so most projects need no file
//! at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! routes_root = "src/routes"              # Where year routes live
//! components_root = "src/lib/components"  # Where per-year components live
//! page_marker = "+page.svelte"            # Page file name for the `pages` walk
//! on_missing_root = "fail"                # "fail" or "empty"
//!
//! [data]
//! base_url = "https://advent.sveltesociety.dev/data"
//! dir = "data"                            # Local mirror of base_url
//! ```
//!
//! ## Partial Configuration
//!
//! A project file only needs the keys that differ from the stock layout:
//!
//! ```toml
//! routes_root = "app/routes"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::data::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "advent.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `advent.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the year routes, relative to the project.
    pub routes_root: String,
    /// Directory holding per-year components, relative to the project.
    pub components_root: String,
    /// File name that marks a page in the `pages` walk.
    pub page_marker: String,
    /// What to do when a listing root is missing.
    pub on_missing_root: MissingRoot,
    /// Year data endpoint and local mirror.
    pub data: DataConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            routes_root: "src/routes".to_string(),
            components_root: "src/lib/components".to_string(),
            page_marker: "+page.svelte".to_string(),
            on_missing_root: MissingRoot::default(),
            data: DataConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.routes_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "routes_root must not be empty".into(),
            ));
        }
        if self.components_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "components_root must not be empty".into(),
            ));
        }
        if self.page_marker.is_empty() || self.page_marker.contains('/') {
            return Err(ConfigError::Validation(
                "page_marker must be a plain file name".into(),
            ));
        }
        if !(self.data.base_url.starts_with("http://") || self.data.base_url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(
                "data.base_url must be an http(s) URL".into(),
            ));
        }
        Ok(())
    }
}

/// Behavior when a listing root does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingRoot {
    /// Report the missing directory as an error.
    #[default]
    Fail,
    /// Treat the missing directory as a site with no years.
    Empty,
}

/// Year data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Endpoint serving `<year>/<dataset>.json`.
    pub base_url: String,
    /// Local mirror with the same layout, relative to the project.
    pub dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            dir: "data".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `advent.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config for a project directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    tracing::debug!(?config, "loaded config");
    Ok(config)
}

/// Returns a fully-commented stock `advent.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# advent-routes configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Paths are relative to the project directory.
# Unknown keys will cause an error.

# Directory holding one sub-directory per year (e.g. src/routes/2023/).
# Paths containing [dynamic] or (group) segments are never treated as years.
routes_root = "src/routes"

# Directory holding per-year components. A component counts for a year when
# its parent directory is named after the year (days/2023/DayOne.svelte).
components_root = "src/lib/components"

# Page file name used by the `pages` command.
page_marker = "+page.svelte"

# What to do when routes_root (or components_root, when counting) does not exist:
#   "fail"  -> report an error
#   "empty" -> behave as if there were no years (redirect goes to "/")
on_missing_root = "fail"

# ---------------------------------------------------------------------------
# Year data
# ---------------------------------------------------------------------------
[data]
# Endpoint serving <year>/<dataset>.json.
base_url = "https://advent.sveltesociety.dev/data"

# Local mirror of base_url with the same layout.
dir = "data"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_sveltekit_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.routes_root, "src/routes");
        assert_eq!(config.components_root, "src/lib/components");
        assert_eq!(config.page_marker, "+page.svelte");
        assert_eq!(config.on_missing_root, MissingRoot::Fail);
        assert_eq!(config.data.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str(r#"routes_root = "app/routes""#).unwrap();
        assert_eq!(config.routes_root, "app/routes");
        assert_eq!(config.components_root, "src/lib/components");
    }

    #[test]
    fn parse_missing_root_policy() {
        let config: SiteConfig = toml::from_str(r#"on_missing_root = "empty""#).unwrap();
        assert_eq!(config.on_missing_root, MissingRoot::Empty);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(r#"routes_rot = "x""#);
        assert!(result.is_err());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.routes_root, defaults.routes_root);
        assert_eq!(config.page_marker, defaults.page_marker);
        assert_eq!(config.data.dir, defaults.data.dir);
        config.validate().unwrap();
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_overrides_nested_keys_only() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[data]\ndir = \"mirror\"").unwrap();
        let config: SiteConfig = merge_toml(base, overlay).try_into().unwrap();
        assert_eq!(config.data.dir, "mirror");
        assert_eq!(config.data.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn merge_scalar_replaces_table() {
        let base: toml::Value = toml::from_str("[a]\nb = 1").unwrap();
        let overlay: toml::Value = toml::from_str("a = 2").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").and_then(|v| v.as_integer()), Some(2));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.routes_root, "src/routes");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "routes_root = \"web/routes\"\n[data]\nbase_url = \"http://localhost:8080/data\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.routes_root, "web/routes");
        assert_eq!(config.data.base_url, "http://localhost:8080/data");
        assert_eq!(config.data.dir, "data");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "routes_root = ").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "page_marker = \"a/b\"").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let mut config = SiteConfig::default();
        config.data.base_url = "ftp://example.com".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_routes_root() {
        let config = SiteConfig {
            routes_root: "  ".into(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
