//! Implementation of `texsearch serve`.

use std::{net::SocketAddr, process::ExitCode};

use tokio::runtime::Builder;

use crate::{
    cli::{args::ServeCommand, context::CommandContext},
    server,
};

/// Serves the search endpoint until interrupted.
pub fn run(ctx: &CommandContext, cmd: &ServeCommand) -> ExitCode {
    let bind = cmd.bind.as_deref().unwrap_or(&ctx.config.server.bind);
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("error: invalid bind address {bind:?}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let searcher = ctx.searcher();
    if let Err(e) = runtime.block_on(server::serve(addr, searcher)) {
        eprintln!("error: server failed: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
