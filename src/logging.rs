//! Subscriber setup for the `page-topics` binary. The library only emits
//! events; installing a subscriber is left to the process that owns stderr.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter directives are read from this variable, e.g.
/// `PAGE_TOPICS_LOG=nu_plugin_page_topics::algo::candidates=trace`.
pub const LOG_ENV: &str = "PAGE_TOPICS_LOG";

/// Install a stderr fmt layer. `verbose` raises the fallback level from
/// `warn` to `debug`; an explicit `PAGE_TOPICS_LOG` always wins.
///
/// Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
