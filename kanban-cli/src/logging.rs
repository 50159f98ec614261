//! Tracing subscriber setup

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn configure_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
