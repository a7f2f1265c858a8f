use std::path::PathBuf;

use thiserror::Error;

use crate::terraform::{EvaluationError, ParseError};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{}: failed to evaluate attribute '{attribute}' of {block}: {source}", .path.display())]
    Evaluation {
        path: PathBuf,
        block: String,
        attribute: String,
        #[source]
        source: EvaluationError,
    },

    #[error("failed to write file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
