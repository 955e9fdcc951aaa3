//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target filter directives,
/// e.g. `TALLY_LOG=tally_core::aggregate=debug`.
pub const LOG_ENV: &str = "TALLY_LOG";

/// Installs the global subscriber. Falls back to `info` (or `debug` when
/// `verbose`) for this crate if `TALLY_LOG` is unset or invalid.
///
/// Calling it more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "tally=debug,tally_core=debug"
        } else {
            "tally=info,tally_core=info"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
