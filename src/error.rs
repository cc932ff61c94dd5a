use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while running an external `ssh`/`scp` process.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` timed out after {}s", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input cancelled")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Io(String),
}

impl From<inquire::InquireError> for PromptError {
    fn from(e: inquire::InquireError) -> Self {
        use inquire::InquireError;
        match e {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                PromptError::Cancelled
            }
            other => PromptError::Io(other.to_string()),
        }
    }
}

/// Reasons an operation is rejected before it touches any file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OperationError {
    #[error("No SSH configuration found. Run --setup first.")]
    ConfigMissing,

    #[error("No files specified to push.")]
    NoFiles,

    #[error("Failed to create remote directory: {0}")]
    RemoteDirectory(String),
}
