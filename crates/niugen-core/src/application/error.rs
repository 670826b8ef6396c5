//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while running the action pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed in the renderer adapter.
    #[error("rendering '{template}' failed: {reason}")]
    RenderFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The external formatter exited non-zero (or could not be spawned).
    #[error("formatter failed: {reason}")]
    FormatterFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderFailed { template, .. } => vec![
                format!("The built-in template '{}' could not be rendered", template),
                "Rerun after fixing the cause; completed files are kept".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Rerunning the generator is safe; existing files are skipped".into(),
            ],
            Self::FormatterFailed { .. } => vec![
                "All generated files are on disk, only formatting failed".into(),
                "Check that pnpm and prettier are installed".into(),
                "Rerun the generator, or format the files manually".into(),
            ],
        }
    }

    /// Error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderFailed { .. } => ErrorCategory::Template,
            Self::FilesystemError { .. } | Self::FormatterFailed { .. } => ErrorCategory::Internal,
        }
    }
}
