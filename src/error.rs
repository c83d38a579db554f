// Typed errors for task-list operations

use thiserror::Error;

/// Exit codes for the tasklist CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tasklist operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("task text cannot be empty")]
    EmptyText,

    #[error("unknown filter: {0} (expected all, active, or completed)")]
    UnknownFilter(String),

    // Operation failures (exit code 4)
    #[error("stored snapshot is corrupt: {0}")]
    CorruptSnapshot(String),

    #[error("failed to write snapshot: {0}")]
    SnapshotWrite(#[source] std::io::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::EmptyText | Error::UnknownFilter(_) => exit_codes::USER_ERROR,
            Error::CorruptSnapshot(_) | Error::SnapshotWrite(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for tasklist operations
pub type Result<T> = std::result::Result<T, Error>;
