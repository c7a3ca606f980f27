// crates/cli/src/output.rs

use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::OutputFormat;

pub fn write_paths<W: Write>(out: &mut W, paths: &[PathBuf], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Lines | OutputFormat::Null => {
            let sep = if format == OutputFormat::Null { b'\0' } else { b'\n' };
            for path in paths {
                out.write_all(path.as_os_str().as_encoded_bytes())?;
                out.write_all(&[sep])?;
            }
        }
        OutputFormat::Json => {
            let names: Vec<String> = paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            serde_json::to_writer_pretty(&mut *out, &names).map_err(io::Error::from)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()
}
