//! Path resolution for corpus definitions.
//!
//! Resolves relative and tilde-prefixed corpus paths to absolute paths. Resolution is purely
//! lexical: the directory is allowed not to exist, since searching a missing corpus is
//! defined to yield no results rather than a configuration error.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a corpus path.
///
/// Handles three cases:
/// - Tilde paths (`~/site/tutorials`) - expanded to home directory
/// - Relative paths (`./tutorials`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// `.` components are dropped from the result.
pub fn resolve_corpus_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    Ok(absolute
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}

/// Formats a path for display, relative to `base` when that is shorter.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base
        && let Some(relative) = pathdiff::diff_paths(path, base)
        && !relative.starts_with("../..")
    {
        if relative.as_os_str().is_empty() {
            return ".".to_string();
        }
        return relative.display().to_string();
    }
    path.display().to_string()
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the user's home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_joined_to_config_dir() {
        let resolved = resolve_corpus_path("./tutorials", Path::new("/srv/site")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/site/tutorials"));
    }

    #[test]
    fn test_absolute_path_unchanged() {
        let resolved = resolve_corpus_path("/data/tex", Path::new("/srv/site")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/tex"));
    }

    #[test]
    fn test_missing_directory_is_not_an_error() {
        let resolved = resolve_corpus_path("does/not/exist", Path::new("/nowhere")).unwrap();
        assert_eq!(resolved, PathBuf::from("/nowhere/does/not/exist"));
    }

    #[test]
    fn test_tilde_expansion() {
        let resolved = resolve_corpus_path("~/tutorials", Path::new("/srv")).unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(resolved, home.join("tutorials"));
    }

    #[test]
    fn test_format_path_relative_to_base() {
        let shown = format_path_for_display(
            Path::new("/srv/site/tutorials"),
            Some(Path::new("/srv/site")),
        );
        assert_eq!(shown, "tutorials");
    }

    #[test]
    fn test_format_path_same_as_base() {
        let shown = format_path_for_display(Path::new("/srv/site"), Some(Path::new("/srv/site")));
        assert_eq!(shown, ".");
    }

    #[test]
    fn test_format_path_without_base() {
        let shown = format_path_for_display(Path::new("/srv/site/tutorials"), None);
        assert_eq!(shown, "/srv/site/tutorials");
    }
}
