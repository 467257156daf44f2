//! Implementation of `texsearch init`.

use std::{fs, path::PathBuf, process::ExitCode};

use texsearch_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};
use texsearch_highlight::{Highlighter, Language, indent, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Which configuration file `init` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// `.texsearch.toml` in the current directory.
    Local,
    /// `~/.texsearch.toml`.
    Global,
}

impl Scope {
    /// Picks the scope; running in the home directory always means global.
    fn select(ctx: &CommandContext, cmd: &InitCommand) -> Self {
        let in_home = global_config_path()
            .is_some_and(|path| path.parent() == Some(ctx.cwd.as_path()));
        if cmd.global || in_home {
            Self::Global
        } else {
            Self::Local
        }
    }

    /// Where the file goes, or `None` when the home directory is unknown.
    fn path(self, ctx: &CommandContext) -> Option<PathBuf> {
        match self {
            Self::Local => Some(ctx.cwd.join(CONFIG_FILENAME)),
            Self::Global => global_config_path(),
        }
    }

    /// The commented-out template for this scope.
    fn template(self) -> String {
        match self {
            Self::Local => local_template(),
            Self::Global => global_template(),
        }
    }
}

/// Writes a commented-out configuration template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let scope = Scope::select(ctx, cmd);
    let Some(path) = scope.path(ctx) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };

    if path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = scope.template();
    if let Err(e) = fs::write(&path, &template) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    let rendered = Highlighter::new().render(&template, Language::Toml);
    println!("{}", indent(&rendered, 3));

    ExitCode::SUCCESS
}
