//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving the corpus path.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, Corpus, SearchSettings, ServerSettings,
    parse::{RawConfig, RawSearchSettings, RawServerSettings},
    resolve::resolve_corpus_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing this config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Corpus path: resolved relative to the directory of the file that defines it; when no
///   file defines one, the default directory under `cwd` is used
pub fn merge_configs(configs: &[ParsedConfig], cwd: &Path) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::with_base(cwd));
    }

    let corpus = merge_corpus(configs, cwd)?;
    let search = merge_search_settings(configs);
    let server = merge_server_settings(configs);
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        corpus,
        search,
        server,
        config_root,
    })
}

/// Merges corpus definitions, resolving the winning path against its own config file.
fn merge_corpus(configs: &[ParsedConfig], cwd: &Path) -> Result<Corpus, ConfigError> {
    let mut corpus = Corpus::under(cwd);

    let raw = |parsed: &ParsedConfig| parsed.config.corpus.clone().unwrap_or_default();

    if let Some((parsed, path)) = configs
        .iter()
        .find_map(|p| raw(p).path.map(|path| (p, path)))
    {
        corpus.path = resolve_corpus_path(&path, parsed.dir())?;
    }
    if let Some(extension) = configs.iter().find_map(|p| raw(p).extension) {
        corpus.extension = extension.trim_start_matches('.').to_string();
    }
    if let Some(prefix) = configs.iter().find_map(|p| raw(p).url_prefix) {
        corpus.url_prefix = prefix.trim_end_matches('/').to_string();
    }

    Ok(corpus)
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.context_radius {
        result.context_radius = v;
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Merges server settings.
fn merge_server_settings(configs: &[ParsedConfig]) -> ServerSettings {
    let mut result = ServerSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref server) = parsed.config.server {
            apply_raw_server(&mut result, server);
        }
    }

    result
}

/// Applies raw server settings to result.
fn apply_raw_server(result: &mut ServerSettings, raw: &RawServerSettings) {
    if let Some(ref v) = raw.bind {
        result.bind.clone_from(v);
    }
}
