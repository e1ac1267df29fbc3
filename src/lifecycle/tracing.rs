//! # Observability & Tracing
//!
//! Every layer logs through `tracing`:
//!
//! - **Actor**: startup, shutdown, creates (`info`), reads (`debug`)
//! - **Clients**: a span per request via `#[instrument]`
//! - **Browser**: a span per operation; service failures at `error`, which is the
//!   only place they are reported
//!
//! ```bash
//! # Default is info; -v for debug, -vv for trace, -q for errors only
//! taxpayer-records -v
//!
//! # RUST_LOG overrides the flags
//! RUST_LOG=taxpayer_records::framework=debug taxpayer-records
//! ```
//!
//! Log lines go to stderr so they never interleave with the page on stdout.

use tracing::Level;

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Initializes the tracing subscriber. Calling it twice is harmless.
pub fn setup_tracing(verbosity: Verbosity) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.level().as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false) // entity_type and span names carry the context
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::Verbose.level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }
}
