//! CLI error surface.
//!
//! One enum for everything that can go wrong at this layer, each variant
//! carrying enough context for a useful message, a list of suggestions, and
//! a stable exit code. Core errors pass through as a single wrapping
//! variant so their own suggestion text survives the trip.

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use niugen_core::domain::ErrorCategory as CoreCategory;
use niugen_core::error::NiugenError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The user gave us something we cannot work with.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything the generator core reported, suggestions included.
    #[error("{0}")]
    Core(#[from] NiugenError),

    /// An I/O operation outside the pipeline failed (terminal, prompts).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user bailed out of a prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// This build was compiled without the needed feature.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Coarse classification driving exit codes and log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    Configuration,
    Internal,
}

impl CliError {
    /// What the user can actually do about it.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file at .niugen.toml".into(),
                "Delete or fix the file and rerun".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No further changes were made".into(),
            ],
            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                "Pass every answer as a flag together with --yes".into(),
                format!("Or reinstall with: cargo install niugen-cli --features {feature}"),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Template | CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// Exit code table: user error 2, configuration 4, everything else 1.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for a colour-capable terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\n{} {}\n\n", "✗".red().bold(), "Error:".red().bold());
        let _ = writeln!(out, "  {}", self.to_string().red());

        if verbose {
            for cause in self.chain() {
                let _ = writeln!(out, "\n  {} {}", "→".dimmed(), cause.to_string().dimmed());
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", "Suggestions:".yellow().bold());
            for s in suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{} {}",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed()
            );
        }

        out
    }

    /// Render without ANSI codes, for pipes and redirected stderr.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {self}");

        if verbose {
            for cause in self.chain() {
                let _ = writeln!(out, "  Caused by: {cause}");
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\nSuggestions:");
            for s in suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Emit a structured event at a severity matching the category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }
        for cause in self.chain() {
            tracing::debug!("Caused by: {}", cause);
        }
    }

    /// Walk the `source()` chain below this error.
    fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niugen_core::domain::DomainError;
    use std::io;

    #[test]
    fn invalid_input_suggests_help() {
        let err = CliError::InvalidInput { message: "bad".into() };
        assert!(err.suggestions().iter().any(|s| s.contains("--help")));
    }

    #[test]
    fn core_validation_error_keeps_core_suggestions() {
        let err = CliError::Core(DomainError::EmptyPackageName.into());
        assert!(err.suggestions().iter().any(|s| s.contains("--name")));
    }

    #[test]
    fn exit_codes_follow_the_table() {
        assert_eq!(CliError::InvalidInput { message: "x".into() }.exit_code(), 2);
        assert_eq!(
            CliError::ConfigError { message: "x".into(), source: None }.exit_code(),
            4
        );
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn exit_code_empty_name_is_user_error() {
        let err = CliError::Core(DomainError::EmptyPackageName.into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_formatter_failure_is_internal() {
        let err = CliError::Core(
            niugen_core::application::ApplicationError::FormatterFailed {
                reason: "exit status 2".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn format_plain_contains_message_and_suggestions() {
        let err = CliError::Core(DomainError::EmptyPackageName.into());
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Package name is required"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        assert!(!CliError::Cancelled.format_plain(true).contains("--verbose"));
    }
}
