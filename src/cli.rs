//! Command-line interface for strictly_gridbot.

use clap::Parser;
use std::ffi::OsString;
use tracing::{debug, instrument};

/// Strictly Gridbot - random-move bot for grid arenas
///
/// Reads one board request as JSON on stdin and writes one move as JSON on
/// stdout. Arguments never stop a turn: anything unrecognised, including
/// `--help` and `--version`, is ignored and the bot plays unseeded.
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_gridbot")]
#[command(about = "Random-move bot for grid game arenas", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed the move generator for reproducible play
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Parses arguments, falling back to the defaults when clap rejects them.
    #[instrument(skip(args))]
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_else(|err| {
            debug!(kind = ?err.kind(), "Ignoring command line");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_unseeded() {
        let cli = Cli::try_parse_from(["strictly_gridbot"]).unwrap();
        assert!(cli.seed.is_none());
    }

    #[test]
    fn seed_is_parsed() {
        let cli = Cli::try_parse_from(["strictly_gridbot", "--seed", "42"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        let cli = Cli::parse_lenient(["strictly_gridbot", "--seed", "42"]);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn unknown_arguments_fall_back_to_defaults() {
        for args in [
            &["strictly_gridbot", "--player", "1"][..],
            &["strictly_gridbot", "extra"],
            &["strictly_gridbot", "--help"],
            &["strictly_gridbot", "--version"],
            &["strictly_gridbot", "--seed", "not-a-number"],
        ] {
            assert!(Cli::parse_lenient(args).seed.is_none(), "args {:?}", args);
        }
    }
}
