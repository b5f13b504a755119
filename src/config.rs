//! Configuration management for the generator.
//!
//! Settings are read from an optional TOML file with platform-specific
//! directory resolution. Every field has a default, so a missing file is the
//! same as an empty one. Command-line flags override file values.

use crate::batch::VariantFilter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory.
pub const CONFIG_DIR_NAME: &str = "miryoku-kanata";

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Root directory that receives `{alpha}/{platform}/` folders
    pub output_dir: PathBuf,
    /// Alternative registry TOML replacing the built-in layouts
    pub registry: Option<PathBuf>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            registry: None,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/miryoku-kanata/config.toml`
/// - macOS: `~/Library/Application Support/miryoku-kanata/config.toml`
/// - Windows: `%APPDATA%\miryoku-kanata\config.toml`
///
/// # Example
///
/// ```toml
/// [paths]
/// output_dir = "build/kanata"
///
/// [filter]
/// alphas = ["colemakdh", "qwerty"]
/// platforms = ["mac"]
/// include_flip = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Which part of the variant matrix to generate
    pub filter: VariantFilter,
}

impl Config {
    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// If the file doesn't exist (or no config directory can be determined),
    /// returns the default configuration.
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses configuration TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.paths.output_dir, PathBuf::from("."));
        assert!(config.filter.include_flip);
        assert!(config.filter.alphas.is_empty());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [paths]
            output_dir = "out"

            [filter]
            platforms = ["mac"]
            include_flip = false
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.output_dir, PathBuf::from("out"));
        assert_eq!(config.paths.registry, None);
        assert_eq!(config.filter.platforms, vec!["mac".to_string()]);
        assert!(!config.filter.include_flip);
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(Config::from_toml_str("[filter]\ninclude_flip = \"yes\"").is_err());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
