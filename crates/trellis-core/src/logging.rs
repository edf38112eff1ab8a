//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,trellis_ui=debug";

/// Install a formatting subscriber, honouring `RUST_LOG` when present.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a formatting subscriber with an explicit filter directive.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    // A second install is ignored so tests and hosts can both call init.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
