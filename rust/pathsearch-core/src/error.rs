use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("invalid search options: {0}")]
    Invalid(String),
    #[error("failed to parse search options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read search options from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
