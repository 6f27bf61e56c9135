use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while analysing a text or preparing a report.
#[derive(Debug, Error)]
pub enum ReadabilityError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown metric '{0}', expected one of: ARI, FK, SMOG, CL, all")]
    UnknownSelector(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReadabilityError>;
