//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from external systems.
//! The `niugen-adapters` crate provides implementations.

use crate::domain::{TemplateContext, TemplateId};
use crate::error::NiugenResult;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `niugen_adapters::filesystem::LocalFilesystem` (production)
/// - `niugen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The pipeline's discipline is "read to decide, then write once": existence
/// checks gate the skip-if-present actions, with no locking between
/// concurrent runs.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NiugenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> NiugenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// A pure function from (template id, data mapping) to text. Implemented by
/// `niugen_adapters::renderer::BuiltinRenderer`.
#[cfg_attr(test, automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the identified template against the context.
    fn render(&self, template: TemplateId, context: &TemplateContext) -> NiugenResult<String>;
}

/// Port for the external code formatter.
///
/// Implemented by:
/// - `niugen_adapters::formatter::PrettierFormatter` (production)
/// - `niugen_adapters::formatter::RecordingFormatter` (testing)
///
/// The formatter operates on the whole batch or fails the batch; it is never
/// called with an empty list.
#[cfg_attr(test, automock)]
pub trait Formatter: Send + Sync {
    /// Format the given files in place.
    fn format(&self, files: &[PathBuf]) -> NiugenResult<()>;
}
