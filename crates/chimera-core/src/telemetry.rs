//! Tracing setup for the dashboard binaries.
//!
//! Filter precedence: `CHIMERA_LOG`, then `RUST_LOG`, then the level passed
//! to [`init_tracing`]. Later calls are no-ops once a global subscriber is set.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "CHIMERA_LOG";

fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber, writing to stderr so rendered output on
/// stdout stays clean.
///
/// * `json`: emit newline-delimited JSON log lines.
/// * `level`: default verbosity when neither env var is set.
pub fn init_tracing(json: bool, level: Level) {
    let filter = build_filter(level);
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(false, Level::WARN);
        init_tracing(true, Level::DEBUG);
        tracing::warn!("still alive");
    }
}
