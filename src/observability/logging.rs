//! Process-wide logging setup
//!
//! Structured, line-oriented events via `tracing`. The level comes from
//! `RUST_LOG` when set, otherwise `info` (`debug` when verbose).

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Returns the default level for the given verbosity
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Builds the event filter, preferring `RUST_LOG`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose).as_str().to_ascii_lowercase()))
}

/// Installs the global subscriber.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), Level::INFO);
        assert_eq!(default_level(true), Level::DEBUG);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }
}
