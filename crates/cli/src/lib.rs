// crates/cli/src/lib.rs
//! Command line front end for BUILD file discovery.

use std::io::Write;
use std::path::Path;

use ignorelist::{IGNORE_FILE_NAME, read_file};
use walk::expand_paths;

pub mod config;
pub mod error;
pub mod options;
pub mod output;

pub use config::{Mode, OutputFormat, ScanConfig, ScanConfigBuilder};
pub use error::{CliError, ExitCode};
pub use options::Options;

/// Runs a scan described by `cfg`, writing results to `out`.
pub fn run<W: Write>(cfg: &ScanConfig, out: &mut W) -> Result<ExitCode, CliError> {
    match cfg.mode {
        Mode::Find => {
            let files = expand_paths(&cfg.paths, cfg.expand_options())?;
            tracing::info!(files = files.len(), "scan complete");
            output::write_paths(out, &files, cfg.output).map_err(CliError::Output)?;
            Ok(ExitCode::Ok)
        }
        Mode::Check => {
            let mut ok = true;
            for path in &cfg.paths {
                ok &= check_one(path, out)?;
            }
            Ok(if ok { ExitCode::Ok } else { ExitCode::CheckFailed })
        }
    }
}

/// Validates the ignore file of the workspace at `path` (or `path` itself
/// when it is a file). Missing ignore files are valid.
fn check_one<W: Write>(path: &Path, out: &mut W) -> Result<bool, CliError> {
    let file_path = if path.is_dir() {
        path.join(IGNORE_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    let file = match read_file(&file_path) {
        Ok(file) => file,
        Err(err) if err.is_not_found() && file_path != path => {
            tracing::info!(path = %file_path.display(), "no ignore file");
            return Ok(true);
        }
        Err(err) => {
            tracing::error!("{err}");
            return Ok(false);
        }
    };

    let ok = file.rejected.is_empty();
    for rejected in &file.rejected {
        writeln!(
            out,
            "{}:{}: absolute path entry {:?}",
            file_path.display(),
            rejected.line,
            rejected.entry
        )
        .map_err(CliError::Output)?;
    }
    tracing::info!(
        path = %file_path.display(),
        prefixes = file.prefixes.len(),
        rejected = file.rejected.len(),
        "checked ignore file"
    );
    Ok(ok)
}
