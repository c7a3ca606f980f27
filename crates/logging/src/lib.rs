// crates/logging/src/lib.rs

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt as tracing_fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod flags;
mod formatter;

pub use flags::{LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::ScanFormatter;

/// Maps `-q`/`-v` to the default level; `RUST_LOG` directives refine it.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        quiet,
        log_file,
        colored,
        timestamps,
    } = cfg;
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let base = tracing_fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(false)
        .with_ansi(colored);
    let fmt_layer = match (format, timestamps) {
        (LogFormat::Json, true) => base.json().boxed(),
        (LogFormat::Json, false) => base.without_time().json().boxed(),
        (LogFormat::Text, _) => base.event_format(ScanFormatter::new(timestamps)).boxed(),
    };

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let base = tracing_fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false);
            let layer = match format {
                LogFormat::Json => base.json().boxed(),
                LogFormat::Text => base.event_format(ScanFormatter::new(true)).boxed(),
            };
            Some(layer)
        }
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(file_layer);
    Ok(Box::new(registry))
}

pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}
