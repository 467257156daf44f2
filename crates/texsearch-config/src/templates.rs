//! Starter files written by `texsearch init`.
//!
//! The templates ship as real TOML so tests can parse them, and are handed out with every
//! setting commented so a fresh file changes nothing until the user opts in.

/// Per-site template.
const LOCAL: &str = include_str!("../templates/config.toml");

/// Template for `~/.texsearch.toml`.
const GLOBAL: &str = include_str!("../templates/config-global.toml");

/// The per-site template, fully commented out.
pub fn local_template() -> String {
    commented(LOCAL)
}

/// The global template, fully commented out.
pub fn global_template() -> String {
    commented(GLOBAL)
}

/// Prefixes every setting line with `# `, leaving comments and blank lines alone.
fn commented(toml: &str) -> String {
    toml.lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
