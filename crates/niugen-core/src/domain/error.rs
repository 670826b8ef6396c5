//! Domain error types.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (answers are re-collected, not retried in place)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Empty or whitespace-only package name.
    #[error("Package name is required")]
    EmptyPackageName,

    /// Unknown package kind string.
    #[error("unknown package kind: {0}")]
    UnknownKind(String),

    /// Destination override points outside the workspace.
    #[error("invalid destination directory '{dir}': {reason}")]
    InvalidDestination { dir: String, reason: String },

    /// A `{{KEY}}` placeholder with no value in the context.
    #[error("no value for placeholder '{{{{{name}}}}}'")]
    UnknownPlaceholder { name: String },

    /// A `{{` that is never closed.
    #[error("unterminated placeholder near '{text}'")]
    UnterminatedPlaceholder { text: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPackageName => vec![
                "Pass a name with --name, or answer the name prompt".into(),
                "Names may be bare (foo) or scoped (@niu/foo)".into(),
            ],
            Self::UnknownKind(kind) => vec![
                format!("'{}' is not a package kind", kind),
                "Supported kinds: lib, config".into(),
            ],
            Self::InvalidDestination { .. } => vec![
                "Destination directories are relative to the repo root".into(),
                "Leave the directory blank to use the kind default".into(),
            ],
            Self::UnknownPlaceholder { name } => vec![format!(
                "Template references '{}' but the generator never sets it",
                name
            )],
            Self::UnterminatedPlaceholder { .. } => {
                vec!["The template has a '{{' without a matching '}}'".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyPackageName | Self::UnknownKind(_) | Self::InvalidDestination { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownPlaceholder { .. } | Self::UnterminatedPlaceholder { .. } => {
                ErrorCategory::Template
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_message_matches_prompt_validation() {
        assert_eq!(DomainError::EmptyPackageName.to_string(), "Package name is required");
    }

    #[test]
    fn placeholder_message_shows_braces() {
        let err = DomainError::UnknownPlaceholder {
            name: "MISSING".into(),
        };
        assert!(err.to_string().contains("{{MISSING}}"));
    }

    #[test]
    fn categories() {
        assert_eq!(
            DomainError::EmptyPackageName.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::UnknownPlaceholder { name: "X".into() }.category(),
            ErrorCategory::Template
        );
    }

    #[test]
    fn every_error_suggests_something() {
        let errors = [
            DomainError::EmptyPackageName,
            DomainError::UnknownKind("app".into()),
            DomainError::InvalidDestination {
                dir: "..".into(),
                reason: "escape".into(),
            },
            DomainError::UnknownPlaceholder { name: "X".into() },
            DomainError::UnterminatedPlaceholder { text: "{{X".into() },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "no suggestions for {err}");
        }
    }
}
