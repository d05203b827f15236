use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrainsightError {
    #[error("Cannot access file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported file type: {name} (accepted: .jpg, .jpeg, .png, .dcm)")]
    UnsupportedFileType { name: String },

    #[error("File too large: {name} is {size_bytes} bytes (limit {limit_bytes} bytes)")]
    FileTooLarge {
        name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("Unknown model identifier: {0}")]
    UnknownModel(String),

    #[error("An analysis is already in progress")]
    SubmissionInFlight,

    #[error("Analysis backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Analysis backend rejected the submission with status {status}: {body}")]
    BackendRejected { status: u16, body: String },

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging setup failed: {0}")]
    LoggingError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BrainsightError {
    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BrainsightError::InvalidArguments(_) | BrainsightError::UnknownModel(_) => 2,
            BrainsightError::BackendUnavailable(_)
            | BrainsightError::BackendRejected { .. }
            | BrainsightError::InvalidResponse(_)
            | BrainsightError::NetworkError(_) => 3,
            BrainsightError::FileAccess { .. }
            | BrainsightError::UnsupportedFileType { .. }
            | BrainsightError::FileTooLarge { .. } => 4,
            BrainsightError::ConfigError(_) => 5,
            _ => 1,
        }
    }
}
