// crates/cli/src/error.rs

use std::io;
use thiserror::Error;
use walk::ExpandError;

/// Process exit statuses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    /// `--check` found rejected entries or unreadable ignore files.
    CheckFailed = 1,
    /// Reserved for clap, which exits with 2 on usage errors.
    Usage = 2,
    Io = 3,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(u8::from(code))
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Expand(#[from] ExpandError),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    #[error("failed to initialize logging: {0}")]
    Logging(#[source] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Expand(_) | CliError::Output(_) | CliError::Logging(_) => ExitCode::Io,
        }
    }
}
