// Error taxonomy for task operations and storage

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the persistence boundary
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read task file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed task file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write task file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize tasks")]
    Serialize(#[source] serde_json::Error),
}

/// Errors surfaced to the user by task operations
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("task with ID {0} not found")]
    NotFound(u32),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TaskError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TaskError::Validation(msg.into())
    }
}

pub type Result<T, E = TaskError> = std::result::Result<T, E>;
