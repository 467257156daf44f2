//! Configuration system for texsearch.
//!
//! texsearch uses TOML configuration files named `.texsearch.toml`. Configuration is resolved
//! by walking up the directory tree from the current working directory, collecting any
//! `.texsearch.toml` files found, then loading `~/.texsearch.toml` as the global config with
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpus, RawSearchSettings, RawServerSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::{format_path_for_display, resolve_corpus_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default document directory, relative to the working directory.
pub const DEFAULT_CORPUS_DIR: &str = "tutorials";

/// Default document file extension (without the dot).
pub const DEFAULT_EXTENSION: &str = "tex";

/// Default prefix for result URLs.
pub const DEFAULT_URL_PREFIX: &str = "/tutorials";

/// Default number of characters kept either side of a match in excerpts.
pub const DEFAULT_CONTEXT_RADIUS: usize = 50;

/// Default bind address for the HTTP endpoint.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Top-level merged configuration for texsearch.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.texsearch.toml` files according to precedence rules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the documents live and how results link to them.
    pub corpus: Corpus,
    /// Search-related settings.
    pub search: SearchSettings,
    /// HTTP endpoint settings.
    pub server: ServerSettings,
    /// Directory containing the most specific config file, if any was found.
    pub config_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base(Path::new("."))
    }
}

impl Config {
    /// Builds the default configuration with the corpus rooted under `base`.
    pub fn with_base(base: &Path) -> Self {
        Self {
            corpus: Corpus::under(base),
            search: SearchSettings::default(),
            server: ServerSettings::default(),
            config_root: None,
        }
    }

    /// Loads configuration by discovering and merging all relevant `.texsearch.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.texsearch.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.texsearch.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns the defaults rooted at `cwd` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files, cwd)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// This is primarily useful for testing.
    pub fn load_from_files(files: &[PathBuf], cwd: &Path) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed, cwd)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A corpus path that doesn't exist or isn't a directory
    /// - A corpus directory holding no files with the configured extension
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged configuration in the same format as a `.texsearch.toml` file,
    /// with the corpus path fully resolved.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            corpus: &self.corpus,
            search: &self.search,
            server: &self.server,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// The document directory and how results link back into it.
#[derive(Debug, Clone, Serialize)]
pub struct Corpus {
    /// Resolved path to the document directory. It may not exist.
    pub path: PathBuf,
    /// Recognized markup extension, without the leading dot.
    pub extension: String,
    /// Prefix for result URLs.
    pub url_prefix: String,
}

impl Corpus {
    /// Returns the default corpus located under `base`.
    pub fn under(base: &Path) -> Self {
        Self {
            path: base.join(DEFAULT_CORPUS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
        }
    }
}

/// Search-related settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Characters kept either side of the first match in excerpts.
    pub context_radius: usize,
    /// Maximum results per query; 0 means unlimited.
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            limit: 0,
        }
    }
}

impl SearchSettings {
    /// Returns the configured result cap, or `None` when unlimited.
    pub fn max_results(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }
}

/// Settings for `texsearch serve`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the HTTP endpoint binds to.
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Corpus location.
    corpus: &'a Corpus,
    /// Search-related settings.
    search: &'a SearchSettings,
    /// HTTP endpoint settings.
    server: &'a ServerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_settings_defaults() {
        let search = SearchSettings::default();
        assert_eq!(search.context_radius, 50);
        assert_eq!(search.limit, 0);
        assert_eq!(search.max_results(), None);
    }

    #[test]
    fn test_max_results_when_limited() {
        let search = SearchSettings {
            context_radius: 50,
            limit: 3,
        };
        assert_eq!(search.max_results(), Some(3));
    }

    #[test]
    fn test_config_with_base() {
        let config = Config::with_base(Path::new("/srv/site"));
        assert_eq!(config.corpus.path, PathBuf::from("/srv/site/tutorials"));
        assert_eq!(config.corpus.extension, "tex");
        assert_eq!(config.corpus.url_prefix, "/tutorials");
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config::with_base(Path::new("/srv/site"));
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[corpus]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("[server]"));
        assert!(toml.contains("extension = \"tex\""));
        assert!(toml.contains("context_radius = 50"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("corpus").is_some());
        assert!(parsed.get("server").is_some());
    }
}
