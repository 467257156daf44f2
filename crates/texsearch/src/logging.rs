//! Tracing initialization.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV: &str = "TEXSEARCH_LOG";

/// Installs the global subscriber, writing to stderr without colors.
///
/// The filter comes from [`LOG_ENV`] when set and valid, `default_directive` otherwise.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .compact()
        .with_writer(io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("warning: failed to initialize logging: {e}");
    }
}
