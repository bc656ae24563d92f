// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevloopError {
    #[error("unknown task '{0}'")]
    UnknownTask(String),

    #[error("duplicate task registration '{0}'")]
    DuplicateTask(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("scanning {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{task}' exited with status {code}")]
    ExternalTool { task: String, code: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DevloopError {
    /// Process exit code for this error.
    ///
    /// External tool failures propagate their own code; an unknown task is a
    /// usage error (2); everything else is a generic failure (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            DevloopError::UnknownTask(_) => 2,
            DevloopError::ExternalTool { code, .. } if *code > 0 => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DevloopError>;
