//! Configuration loading.
//!
//! The file format is chosen by extension: `.yaml`/`.yml`, `.toml`, anything
//! else is treated as JSON. Parsing yields the raw schema types from
//! [`schema`](super::schema); rule compilation (regex validation, `_`-key
//! filtering) happens immediately afterwards so a loaded [`Config`] is ready
//! for matching with no per-request work.

use super::schema::{RawConfig, SystemConfig};
use crate::router::rewrite::RouteTable;
use anyhow::Context as _;
use std::path::Path;
use tracing::info;

/// A loaded, compiled configuration snapshot.
///
/// Immutable once built; reloads produce a fresh `Config` that is swapped in
/// atomically (see [`hot_reload`](crate::hot_reload)).
#[derive(Debug)]
pub struct Config {
    pub system: SystemConfig,
    pub table: RouteTable,
}

impl Config {
    /// Compile a raw deserialized configuration into matchable form.
    #[must_use]
    pub fn from_raw(raw: RawConfig) -> Self {
        let table = RouteTable::compile(&raw.router);
        Self {
            system: raw.system,
            table,
        }
    }

    /// Parse a YAML configuration string. Handy for tests and embedded
    /// defaults.
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(content)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a TOML configuration string.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a JSON configuration string.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_json::from_str(content)?;
        Ok(Self::from_raw(raw))
    }
}

/// Load and compile a configuration file, choosing the parser by extension.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let config = match ext {
        "yaml" | "yml" => Config::from_yaml(&content),
        "toml" => Config::from_toml(&content),
        _ => Config::from_json(&content),
    }
    .with_context(|| format!("failed to parse config file {}", path.display()))?;

    info!(
        path = %path.display(),
        rules = config.table.rules().len(),
        ignore_patterns = config.table.ignore_patterns(),
        url_mode = %config.system.url_mode,
        "Configuration loaded"
    );

    Ok(config)
}
