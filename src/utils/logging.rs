use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `docsearch=trace`)
pub const LOG_ENV: &str = "DOCSEARCH_LOG";

/// Install the stderr log subscriber.
///
/// Defaults to `warn` so query output on stdout stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
