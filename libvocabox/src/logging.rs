//! Logging setup shared by Vocabox front ends
//!
//! Events go to stderr so game prompts on stdout stay readable. Format and
//! level come from `VOCABOX_LOG_FORMAT` / `VOCABOX_LOG_LEVEL`; `RUST_LOG`
//! still wins when set.
//!
//! ```no_run
//! use libvocabox::logging::{LogFormat, LoggingConfig};
//!
//! LoggingConfig::new(LogFormat::Json, "libvocabox=debug").init();
//!
//! // Or from the environment, forcing debug with `--verbose`
//! libvocabox::logging::init_with_verbosity(true);
//! ```

use std::fmt;
use std::str::FromStr;

/// Level used when neither the environment nor `--verbose` say otherwise
pub const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain lines without colors
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Multi-line, colored, with source locations
    Pretty,
}

impl LogFormat {
    const ALL: [LogFormat; 3] = [LogFormat::Text, LogFormat::Json, LogFormat::Pretty];

    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| format!("Invalid log format: '{}'. Valid options: text, json, pretty", s))
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive, e.g. `info` or `libvocabox=trace`
    pub level: String,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: impl Into<String>) -> Self {
        Self {
            format,
            level: level.into(),
        }
    }

    /// Read `VOCABOX_LOG_FORMAT` and `VOCABOX_LOG_LEVEL`
    ///
    /// An unknown format falls back to text. `verbose` overrides the level
    /// with `debug`.
    pub fn from_env(verbose: bool) -> Self {
        let format = std::env::var("VOCABOX_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let level = if verbose {
            "debug".to_string()
        } else {
            std::env::var("VOCABOX_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LEVEL.to_string())
        };
        Self { format, level }
    }

    /// Install the global subscriber; later calls leave the first one in place
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        let installed = match self.format {
            LogFormat::Text => builder.with_target(false).try_init(),
            LogFormat::Json => builder
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .try_init(),
            LogFormat::Pretty => builder.pretty().with_file(true).with_line_number(true).try_init(),
        };

        if installed.is_err() {
            tracing::debug!("logging already initialized");
        }
    }
}

/// Logging from the environment, at `debug` when `verbose` is set
pub fn init_with_verbosity(verbose: bool) {
    LoggingConfig::from_env(verbose).init();
}
