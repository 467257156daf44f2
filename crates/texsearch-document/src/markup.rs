//! Markup stripping for excerpts.

use std::sync::LazyLock;

use regex::Regex;

/// A command name, optionally followed by one brace group without nested braces.
static COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\[a-zA-Z]+(\{[^}]*\})?").expect("command pattern is a valid regex")
});

/// Replaces every markup command (and its first argument) with a single space.
///
/// Only the first brace group is consumed, so `\href{a}{b}` leaves `{b}` behind. Stray
/// braces and escaped characters such as `\%` survive untouched.
pub fn strip_markup(text: &str) -> String {
    COMMAND.replace_all(text, " ").into_owned()
}
