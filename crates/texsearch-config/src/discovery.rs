//! Locating `.texsearch.toml` files.
//!
//! Every ancestor of the working directory may hold one. The nearest file wins on
//! conflicts; `root = true` ends the walk there and also shuts out `~/.texsearch.toml`,
//! which otherwise comes last.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".texsearch.toml";

/// Returns the configuration files that apply to `cwd`, nearest first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    // Home is usually an ancestor already, in which case the file was picked up above.
    if let Some(global) = global_config_path().filter(|p| p.is_file())
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// `~/.texsearch.toml`, or `None` when there is no home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Whether `path` is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;

    /// Drops the global config, which depends on the machine running the tests.
    fn local(configs: Vec<PathBuf>) -> Vec<PathBuf> {
        configs.into_iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_nothing_to_discover() {
        let fx = Fixture::new();
        let cwd = fx.dir("site/tutorials/drafts");
        assert!(local(discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn test_nearest_config_first() {
        let fx = Fixture::new();
        let outer = fx.config("", "# outer\n");
        let inner = fx.config("site", "# inner\n");
        let cwd = fx.dir("site/tutorials");

        assert_eq!(local(discover_config_files(&cwd)), vec![inner, outer]);
    }

    #[test]
    fn test_cwd_itself_is_searched() {
        let fx = Fixture::new();
        let here = fx.config("site", "");
        assert_eq!(local(discover_config_files(&fx.path().join("site"))), vec![here]);
    }

    #[test]
    fn test_directory_named_like_config_is_ignored() {
        let fx = Fixture::new();
        fx.dir(CONFIG_FILENAME);
        let cwd = fx.dir("site");
        assert!(local(discover_config_files(&cwd)).is_empty());
    }

    #[test]
    fn test_root_config_stops_walk() {
        let fx = Fixture::new();
        fx.config("", "# outer\n");
        let root = fx.config("site", "root = true\n");
        let cwd = fx.dir("site/tutorials");

        // No filtering: a root config excludes the global file too.
        assert_eq!(discover_config_files(&cwd), vec![root]);
    }

    #[test]
    fn test_root_false_keeps_walking() {
        let fx = Fixture::new();
        let outer = fx.config("", "");
        let inner = fx.config("site", "root = false\n");
        let cwd = fx.dir("site/tutorials");

        assert_eq!(local(discover_config_files(&cwd)), vec![inner, outer]);
    }

    #[test]
    fn test_global_config_path_has_filename() {
        let path = global_config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&path));
    }
}
