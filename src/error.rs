//! Error types for COFFEA

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// COFFEA errors
#[derive(Error, Debug)]
pub enum Error {
    /// A custom header list was supplied whose length does not match the
    /// number of non-outcome columns. Raised before any row is compiled.
    #[error("header mismatch: table has {expected} state columns but {got} custom headers were supplied")]
    HeaderMismatch { expected: usize, got: usize },

    #[error("table is empty: no header row found")]
    EmptyTable,

    #[error("table has no state columns before the outcome column")]
    NoStateColumns,

    #[error("ragged row at line {line}: expected {expected} cells, got {got}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid cube: {0}")]
    InvalidCube(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
