//! Command-line interface for texsearch.

use std::process::ExitCode;

use texsearch::{
    cli::{
        CommandContext,
        args::{Commands, parse_cli},
        commands,
    },
    logging,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.command.default_log_filter());

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
