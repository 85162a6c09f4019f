//! Errors from loading configuration and scenes.  Tracing itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Scene numbers start at 1
    #[error("no scene {requested}; {available} scenes available")]
    UnknownScene { requested: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TraceError>;
