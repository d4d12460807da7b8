//! Diagnostic logging to stderr

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use menutree::config::Verbosity;

/// Install the global subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
