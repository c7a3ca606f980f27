// src/bin/buildscan/main.rs

use buildscan::scan_with_config;
use buildscan_cli::Options;
use clap::Parser;
use std::io;

fn main() -> std::process::ExitCode {
    let opts = Options::parse();
    let cfg = opts.to_config();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match scan_with_config(&cfg, &mut out) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("buildscan: {e}");
            e.exit_code().into()
        }
    }
}
