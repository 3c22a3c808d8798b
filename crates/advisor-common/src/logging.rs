//! Tracing initialization shared by the binaries.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info";

/// Build the log filter from `RUST_LOG`-style directives, falling back to `info`
/// when they are absent or do not parse.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the fmt subscriber on stderr. Subsequent calls are no-ops.
///
/// stdout stays free for the MCP binary's JSON-RPC stream.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
