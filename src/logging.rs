//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "MDQUIZ_LOG";

/// Install the stderr subscriber.
///
/// `MDQUIZ_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate with `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "mdquiz=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
