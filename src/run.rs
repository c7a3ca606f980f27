// src/run.rs

use std::io::Write;

use buildscan_cli::{CliError, ExitCode, ScanConfig};
use logging::subscriber;
use tracing::subscriber::with_default;

/// Runs `cfg` with its logging configuration installed for the duration of
/// the scan.
pub fn scan_with_config<W: Write>(cfg: &ScanConfig, out: &mut W) -> Result<ExitCode, CliError> {
    let sub = subscriber(cfg.logging.clone()).map_err(CliError::Logging)?;
    with_default(sub, || buildscan_cli::run(cfg, out))
}
