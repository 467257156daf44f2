//! Implementation of `texsearch config`.

use std::process::ExitCode;

use texsearch_highlight::{Highlighter, Language};

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let highlighter = Highlighter::new();
    print!("{}", highlighter.render(&toml, Language::Toml));
    ExitCode::SUCCESS
}
