//! Configuration file parsing.
//!
//! Parses individual `.texsearch.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Corpus section.
    pub corpus: Option<RawCorpus>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Server settings section.
    pub server: Option<RawServerSettings>,
}

/// Raw corpus definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCorpus {
    /// Path to the document directory, relative to the config file.
    pub path: Option<String>,
    /// Recognized document extension.
    pub extension: Option<String>,
    /// Prefix for result URLs.
    pub url_prefix: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Characters kept either side of a match in excerpts.
    pub context_radius: Option<usize>,
    /// Maximum results per query (0 = unlimited).
    pub limit: Option<usize>,
}

/// Raw server settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawServerSettings {
    /// Bind address for the HTTP endpoint.
    pub bind: Option<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
