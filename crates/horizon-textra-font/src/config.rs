//! Registry configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assets::AssetSource;
use crate::error::{FontError, Result};
use crate::metrics::MetricsTable;

/// Settings for [`KnownFonts`](crate::KnownFonts).
///
/// ```toml
/// asset_prefix = "fonts"
/// bundled_root = "assets"
/// local_root = "."
/// metrics_path = "my_metrics.toml"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnownFontsConfig {
    /// Joined in front of every asset file name.
    pub asset_prefix: String,
    /// Searched first.
    pub bundled_root: PathBuf,
    /// Searched when a file is not bundled.
    pub local_root: PathBuf,
    /// Replaces the built-in metrics table.
    pub metrics_path: Option<PathBuf>,
}

impl Default for KnownFontsConfig {
    fn default() -> Self {
        Self {
            asset_prefix: String::new(),
            bundled_root: PathBuf::from("assets"),
            local_root: PathBuf::from("."),
            metrics_path: None,
        }
    }
}

impl KnownFontsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    pub fn with_bundled_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.bundled_root = root.into();
        self
    }

    pub fn with_local_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.local_root = root.into();
        self
    }

    pub fn with_metrics_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metrics_path = Some(path.into());
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| FontError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// The asset search locations described by this config.
    pub fn asset_source(&self) -> AssetSource {
        AssetSource::new(&self.bundled_root, &self.local_root).with_prefix(self.asset_prefix.clone())
    }

    /// The metrics table: the override file if set, otherwise the built-in one.
    pub fn metrics_table(&self) -> Result<MetricsTable> {
        match &self.metrics_path {
            Some(path) => MetricsTable::from_file(path),
            None => MetricsTable::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = KnownFontsConfig::from_toml_str("asset_prefix = \"fonts\"").unwrap();
        assert_eq!(config.asset_prefix, "fonts");
        assert_eq!(config.bundled_root, PathBuf::from("assets"));
        assert_eq!(config.asset_source().prefix(), "fonts/");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(KnownFontsConfig::from_toml_str("prefix = \"x\"").is_err());
    }

    #[test]
    fn test_metrics_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.toml");
        std::fs::write(&path, "[fonts.Gentium]\ndescent = -3.0\n").unwrap();
        let table = KnownFontsConfig::new().with_metrics_path(&path).metrics_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Gentium").descent, Some(-3.0));
    }
}
