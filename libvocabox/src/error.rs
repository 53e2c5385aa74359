//! Error types for Vocabox
//!
//! Game actions never fail: illegal actions are ignored and missing content
//! shows up as empty results. Errors only come from loading configuration
//! and word datasets.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VocaboxError>;

#[derive(Error, Debug)]
pub enum VocaboxError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Word data error: {0}")]
    Data(#[from] DataError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl VocaboxError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VocaboxError::InvalidInput(_) => 3,
            VocaboxError::Config(_) => 1,
            VocaboxError::Data(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("No configuration directory on this platform; set VOCABOX_CONFIG")]
    NoConfigDir,

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read word file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse word file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No word files found in {0}")]
    Empty(String),
}
