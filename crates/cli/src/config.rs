// crates/cli/src/config.rs

use logging::SubscriberConfig;
use std::path::PathBuf;
use walk::{ExpandOptions, FileKind};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// List matching files.
    #[default]
    Find,
    /// Validate ignore files.
    Check,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Lines,
    Null,
    Json,
}

/// Configuration for a scan run.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    pub paths: Vec<PathBuf>,
    pub mode: Mode,
    pub respect_ignore: bool,
    pub kind: FileKind,
    pub output: OutputFormat,
    pub stats: bool,
    pub logging: SubscriberConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            mode: Mode::Find,
            respect_ignore: true,
            kind: FileKind::Build,
            output: OutputFormat::Lines,
            stats: false,
            logging: SubscriberConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Create a new builder for [`ScanConfig`].
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    pub fn expand_options(&self) -> ExpandOptions {
        ExpandOptions {
            respect_ignore: self.respect_ignore,
            kind: self.kind,
            report: self.stats,
        }
    }
}

/// Builder for [`ScanConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct ScanConfigBuilder {
    cfg: ScanConfig,
}

impl ScanConfigBuilder {
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        if !paths.is_empty() {
            self.cfg.paths = paths;
        }
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.cfg.mode = mode;
        self
    }

    pub fn respect_ignore(mut self, respect_ignore: bool) -> Self {
        self.cfg.respect_ignore = respect_ignore;
        self
    }

    pub fn kind(mut self, kind: FileKind) -> Self {
        self.cfg.kind = kind;
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.cfg.output = output;
        self
    }

    pub fn stats(mut self, stats: bool) -> Self {
        self.cfg.stats = stats;
        self
    }

    pub fn logging(mut self, logging: SubscriberConfig) -> Self {
        self.cfg.logging = logging;
        self
    }

    pub fn build(self) -> ScanConfig {
        self.cfg
    }
}
