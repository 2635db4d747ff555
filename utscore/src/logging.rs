//! Logging setup shared by every app binary.
//!
//! Apps log through the `tracing` macros. `init` installs a subscriber that
//! honours `RUST_LOG` and falls back to the level the app asks for.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().without_time())
        .try_init();
}
