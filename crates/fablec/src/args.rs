//! the args for running fablec

use clap::value_parser;
use clap::ArgAction;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Parses fable narratives into syntax trees")]
pub struct Args {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="verbose")]
    quiet: u8,

    /// The source file to parse, or `-` to read from stdin
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    source: PathBuf,
    /// Print the tokens of the source before its tree
    #[clap(short = 't', long)]
    pub tokens: bool,
    /// Move loop and conditional bodies under their headers before printing
    #[clap(short = 'n', long)]
    pub nest: bool,
}

impl Args {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used.
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum.clamp(-2, 2) {
            -2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Gets the source file, or `None` if the source should be read from stdin
    pub fn source_file(&self) -> Option<&Path> {
        (self.source != Path::new("-")).then_some(self.source.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["fablec", "quest.fable"]).expect("could not parse args");
        assert_eq!(args.source_file(), Some(Path::new("quest.fable")));
        assert!(!args.tokens);
        assert!(!args.nest);
        assert_eq!(args.log_level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_stdin() {
        let args = Args::try_parse_from(["fablec", "--nest", "-"]).expect("could not parse args");
        assert_eq!(args.source_file(), None);
        assert!(args.nest);
    }

    #[test]
    fn test_verbosity() {
        let args = Args::try_parse_from(["fablec", "-vv", "-t", "quest.fable"]).unwrap();
        assert_eq!(args.log_level_filter(), LevelFilter::TRACE);
        assert!(args.tokens);
        let args = Args::try_parse_from(["fablec", "-qq", "quest.fable"]).unwrap();
        assert_eq!(args.log_level_filter(), LevelFilter::OFF);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["fablec", "-v", "-q", "quest.fable"]).is_err());
    }

    #[test]
    fn test_source_required() {
        assert!(Args::try_parse_from(["fablec"]).is_err());
    }
}
