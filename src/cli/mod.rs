//! Command-line interface for the `taxpayer-records` binary.
//!
//! The binary starts the record service, mounts a [`RecordBrowser`](crate::browser::RecordBrowser) and then reads
//! one [`PageCommand`] per line from stdin, re-rendering the page after each.

mod commands;
mod page;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{CommandError, PageCommand, HELP};
pub use page::{apply, render_page, Flow};

use crate::lifecycle::Verbosity;

/// taxpayer-records - list, search and add taxpayer entries
#[derive(Debug, Parser)]
#[command(name = "taxpayer-records")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::parse_from(["taxpayer-records"]);
        assert_eq!(cli.verbosity(), Verbosity::Normal);
        assert!(cli.config.is_none());

        let cli = Cli::parse_from(["taxpayer-records", "-vv", "--config", "x.toml"]);
        assert_eq!(cli.verbosity(), Verbosity::Trace);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));

        let cli = Cli::parse_from(["taxpayer-records", "-q"]);
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["taxpayer-records", "-q", "-v"]).is_err());
    }
}
