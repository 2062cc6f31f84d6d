//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Library code emits `tracing` events; the CLI installs a subscriber that
//! writes them to stderr so query output on stdout stays clean.
//!
//! # Log Levels
//!
//! - `warn`: default, only problems
//! - `info`: dictionary loading
//! - `debug`: index construction and starter search progress
//! - `trace`: every starter candidate examined

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter used when `RUST_LOG` is not set.
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    ///
    /// - 0 (no `-v`): warn level
    /// - 1 (`-v`): info level
    /// - 2 (`-vv`): debug level
    /// - 3+ (`-vvv`): trace level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            with_target: verbosity >= 2,
            ..Default::default()
        }
    }

    /// Filter directive for this crate at the configured level.
    #[must_use]
    pub fn directive(&self) -> String {
        format!(
            "{}={}",
            env!("CARGO_PKG_NAME"),
            self.level.as_str().to_lowercase()
        )
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.directive()))?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(5).level, Level::TRACE);
    }

    #[test]
    fn target_shown_when_debugging() {
        assert!(!LogConfig::from_verbosity(1).with_target);
        assert!(LogConfig::from_verbosity(2).with_target);
    }

    #[test]
    fn directive_names_this_crate() {
        assert_eq!(
            LogConfig::from_verbosity(2).directive(),
            "anagram_index=debug"
        );
    }
}
