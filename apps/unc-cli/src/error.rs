//! Error types for the unc binary.

use std::path::PathBuf;

use unc_core::UncError;
use unc_table::TableError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Arithmetic error: {0}")]
    Core(#[from] UncError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
