//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template fetch failed (network, clone, or post-clone cleanup).
    ///
    /// This is the one fatal failure in the pipeline: no materialization is
    /// attempted after it.
    #[error("Template fetch failed: {reason}")]
    FetchFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be spawned or exited non-zero.
    #[error("External command failed: {command}")]
    CommandFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FetchFailed { reason } => vec![
                format!("Fetch failed: {}", reason),
                "Check your network connection".into(),
                "Ensure `git` is installed and on your PATH".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Command failed: {}", command),
                "Ensure the command is installed and in your PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FetchFailed { .. }
            | Self::FilesystemError { .. }
            | Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}
