// crates/cli/src/options.rs

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use logging::{LogFormat, SubscriberConfig};
use walk::FileKind;

use crate::config::{Mode, OutputFormat, ScanConfig};

#[derive(Parser, Debug)]
#[command(
    name = "buildscan",
    version,
    about = "List the BUILD files of a workspace, skipping paths excluded by .bazelignore"
)]
pub struct Options {
    /// Files are printed as given; directories are searched recursively.
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,
    #[arg(
        long = "no-ignore",
        help_heading = "Selection",
        help = "do not read .bazelignore"
    )]
    pub no_ignore: bool,
    #[arg(
        long,
        help_heading = "Selection",
        help = "collect all Starlark files (WORKSPACE, *.bzl, ...) instead of only BUILD files"
    )]
    pub starlark: bool,
    #[arg(
        long,
        help_heading = "Selection",
        conflicts_with_all = ["json", "null", "stats", "no_ignore", "starlark"],
        help = "validate .bazelignore instead of listing files"
    )]
    pub check: bool,
    #[arg(
        short = '0',
        long = "null",
        help_heading = "Output",
        conflicts_with = "json",
        help = "separate paths with NUL"
    )]
    pub null: bool,
    #[arg(long, help_heading = "Output", help = "print paths as a JSON array")]
    pub json: bool,
    #[arg(long, help_heading = "Output", help = "log walk statistics")]
    pub stats: bool,
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
    #[arg(
        long = "log-format",
        value_enum,
        value_name = "FMT",
        default_value_t = LogFormat::Text,
        help_heading = "Logging"
    )]
    pub log_format: LogFormat,
    #[arg(long = "log-file", value_name = "FILE", help_heading = "Logging")]
    pub log_file: Option<PathBuf>,
}

impl Options {
    pub fn to_config(&self) -> ScanConfig {
        let output = if self.json {
            OutputFormat::Json
        } else if self.null {
            OutputFormat::Null
        } else {
            OutputFormat::Lines
        };
        let logging = SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose.max(u8::from(self.stats)))
            .quiet(self.quiet)
            .log_file(self.log_file.clone())
            .colored(std::io::stderr().is_terminal())
            .build();
        ScanConfig::builder()
            .paths(self.paths.clone())
            .mode(if self.check { Mode::Check } else { Mode::Find })
            .respect_ignore(!self.no_ignore)
            .kind(if self.starlark {
                FileKind::Starlark
            } else {
                FileKind::Build
            })
            .output(output)
            .stats(self.stats)
            .logging(logging)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("buildscan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_current_directory() {
        let cfg = parse(&[]).to_config();
        assert_eq!(cfg.paths, vec![PathBuf::from(".")]);
        assert_eq!(cfg.mode, Mode::Find);
        assert!(cfg.respect_ignore);
        assert_eq!(cfg.kind, FileKind::Build);
        assert_eq!(cfg.output, OutputFormat::Lines);
        assert_eq!(cfg.logging.verbose, 0);
    }

    #[test]
    fn selection_and_output_flags() {
        let cfg = parse(&["--no-ignore", "--starlark", "-0", "a", "b"]).to_config();
        assert_eq!(cfg.paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert!(!cfg.respect_ignore);
        assert_eq!(cfg.kind, FileKind::Starlark);
        assert_eq!(cfg.output, OutputFormat::Null);
    }

    #[test]
    fn stats_raise_verbosity_to_info() {
        let cfg = parse(&["--stats"]).to_config();
        assert!(cfg.stats);
        assert_eq!(cfg.logging.verbose, 1);
        let cfg = parse(&["--stats", "-vv"]).to_config();
        assert_eq!(cfg.logging.verbose, 2);
    }

    #[test]
    fn logging_flags() {
        let cfg = parse(&["-q", "--log-format", "json", "--log-file", "scan.log"]).to_config();
        assert!(cfg.logging.quiet);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.log_file, Some(PathBuf::from("scan.log")));
    }

    #[test]
    fn check_conflicts_with_output_flags() {
        let cfg = parse(&["--check"]).to_config();
        assert_eq!(cfg.mode, Mode::Check);
        let err = Options::try_parse_from(["buildscan", "--check", "--json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn json_conflicts_with_null() {
        let err = Options::try_parse_from(["buildscan", "--json", "-0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
