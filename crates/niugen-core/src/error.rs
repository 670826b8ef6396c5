//! Unified error handling for niugen core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory};

/// Root error type for niugen core operations.
#[derive(Debug, Error, Clone)]
pub enum NiugenError {
    /// Errors from the domain layer (validation, normalization).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline execution).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl NiugenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type NiugenResult<T> = Result<T, NiugenError>;
