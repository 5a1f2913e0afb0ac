//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{AppError, Result};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "AGECALC_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Pick the filter: `--verbose` wins, then `AGECALC_LOG`, then `warn`.
pub fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Logs go to stderr.
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter() {
        assert_eq!(build_filter(true).to_string(), "debug");
    }
}
