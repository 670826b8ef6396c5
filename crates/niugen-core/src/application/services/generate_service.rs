//! Generate Service - main application orchestrator.
//!
//! This service runs the whole generation workflow:
//! 1. Resolve package identity and destination from the answers
//! 2. Build the template context
//! 3. Execute the action pipeline (write files, then format)
//!
//! One invocation is one sequential pass. There is no rollback: creation
//! steps are idempotent (skip-if-present) or intentionally always-rewritten
//! (the manifest), so the recovery path for any failure is to rerun.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, Formatter, TemplateRenderer},
    domain::{self, Action, DerivedPaths, GeneratorAnswers, TemplateContext},
    error::NiugenResult,
};

/// The auditable result of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// File rendered and written.
    Written(String),
    /// File already existed and was left untouched.
    Skipped(String),
    /// Formatter ran over this many files.
    Formatted(usize),
    /// Formatting was disabled for this run.
    FormatSkipped,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written(path) => write!(f, "written   {path}"),
            Self::Skipped(path) => write!(f, "skipped   {path} (exists)"),
            Self::Formatted(count) => write!(f, "formatted {count} files"),
            Self::FormatSkipped => write!(f, "formatting skipped"),
        }
    }
}

/// Everything a caller needs to report on a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub derived: DerivedPaths,
    pub outcomes: Vec<ActionOutcome>,
}

impl GenerateReport {
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ActionOutcome::Written(_)))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ActionOutcome::Skipped(_)))
            .count()
    }
}

/// Main generation service.
///
/// Owns the driven-port adapters and runs the action pipeline against them.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    formatter: Box<dyn Formatter>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        formatter: Box<dyn Formatter>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            formatter,
        }
    }

    /// Generate a workspace package.
    ///
    /// `format` controls whether the trailing format step receives the real
    /// file list or an empty one (reported as skipped).
    ///
    /// Any step failure aborts the remaining pipeline and propagates;
    /// already-written files stay on disk.
    #[instrument(skip_all, fields(package = %answers.name(), kind = %answers.kind()))]
    pub fn generate(
        &self,
        answers: &GeneratorAnswers,
        format: bool,
    ) -> NiugenResult<GenerateReport> {
        let derived = domain::dest::resolve(answers)?;
        info!(
            scoped_name = %derived.scoped_name,
            package_dir = %derived.package_dir,
            "destination resolved"
        );

        let context = TemplateContext::for_package(answers, &derived);
        let mut outcomes = Vec::new();

        for action in domain::plan(format) {
            match action {
                Action::CreateFile {
                    path,
                    template,
                    overwrite,
                } => {
                    let target = context.render(path)?;
                    let target_path = PathBuf::from(&target);

                    if !overwrite && self.filesystem.exists(&target_path) {
                        debug!(path = %target, "exists, skipping");
                        outcomes.push(ActionOutcome::Skipped(target));
                        continue;
                    }

                    let content = self.renderer.render(template, &context)?;
                    if let Some(parent) = target_path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&target_path, &content)?;
                    debug!(path = %target, template = %template, "written");
                    outcomes.push(ActionOutcome::Written(target));
                }
                Action::Format { files } => {
                    if files.is_empty() {
                        debug!("format step has no files, skipping");
                        outcomes.push(ActionOutcome::FormatSkipped);
                        continue;
                    }
                    let resolved = files
                        .iter()
                        .map(|f| context.render(f).map(PathBuf::from))
                        .collect::<Result<Vec<_>, _>>()?;
                    self.formatter.format(&resolved)?;
                    outcomes.push(ActionOutcome::Formatted(resolved.len()));
                }
            }
        }

        info!(
            written = outcomes.iter().filter(|o| matches!(o, ActionOutcome::Written(_))).count(),
            "generation completed"
        );
        Ok(GenerateReport { derived, outcomes })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockFormatter, MockTemplateRenderer};
    use crate::application::ApplicationError;
    use crate::domain::{PackageKind, TemplateId};
    use crate::error::NiugenError;

    fn answers() -> GeneratorAnswers {
        GeneratorAnswers::new("niu", "foo", PackageKind::Lib, None, false).unwrap()
    }

    fn renderer_ok() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|template, _| Ok(format!("content of {template}")));
        renderer
    }

    fn service(
        renderer: MockTemplateRenderer,
        filesystem: MockFilesystem,
        formatter: MockFormatter,
    ) -> GenerateService {
        GenerateService::new(Box::new(renderer), Box::new(filesystem), Box::new(formatter))
    }

    #[test]
    fn fresh_run_writes_all_four_files_and_formats() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(4).returning(|_| Ok(()));
        fs.expect_write_file().times(4).returning(|_, _| Ok(()));

        let mut fmt = MockFormatter::new();
        fmt.expect_format()
            .times(1)
            .withf(|files| files.len() == 4)
            .returning(|_| Ok(()));

        let report = service(renderer_ok(), fs, fmt)
            .generate(&answers(), true)
            .unwrap();

        assert_eq!(report.written_count(), 4);
        assert_eq!(report.skipped_count(), 0);
        assert_eq!(report.derived.package_dir, "packages/foo");
        assert!(report.outcomes.contains(&ActionOutcome::Formatted(4)));
    }

    #[test]
    fn rerun_skips_existing_files_but_rewrites_manifest() {
        let mut fs = MockFilesystem::new();
        // Everything already exists; only the manifest (overwrite=true) never
        // reaches the existence check.
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .times(1)
            .withf(|path, _| path.ends_with("package.json"))
            .returning(|_, _| Ok(()));

        let mut fmt = MockFormatter::new();
        fmt.expect_format().returning(|_| Ok(()));

        let report = service(renderer_ok(), fs, fmt)
            .generate(&answers(), true)
            .unwrap();

        assert_eq!(report.written_count(), 1);
        assert_eq!(report.skipped_count(), 3);
        assert!(
            report
                .outcomes
                .contains(&ActionOutcome::Skipped("packages/foo/tsconfig.json".into()))
        );
    }

    #[test]
    fn disabled_format_reports_skip_and_never_spawns() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        // No expectation on the formatter: any call would panic the test.
        let fmt = MockFormatter::new();

        let report = service(renderer_ok(), fs, fmt)
            .generate(&answers(), false)
            .unwrap();

        assert!(report.outcomes.contains(&ActionOutcome::FormatSkipped));
    }

    #[test]
    fn render_failure_aborts_remaining_steps() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|template, _| {
            if template == TemplateId::CompilerConfig {
                Err(ApplicationError::RenderFailed {
                    template: template.to_string(),
                    reason: "missing template".into(),
                }
                .into())
            } else {
                Ok("content".into())
            }
        });

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // Only the manifest lands before the failure.
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let fmt = MockFormatter::new();

        let err = service(renderer, fs, fmt)
            .generate(&answers(), true)
            .unwrap_err();
        assert!(matches!(
            err,
            NiugenError::Application(ApplicationError::RenderFailed { .. })
        ));
    }

    #[test]
    fn formatter_failure_fails_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut fmt = MockFormatter::new();
        fmt.expect_format().returning(|_| {
            Err(ApplicationError::FormatterFailed {
                reason: "exit status 2".into(),
            }
            .into())
        });

        let err = service(renderer_ok(), fs, fmt)
            .generate(&answers(), true)
            .unwrap_err();
        assert!(matches!(
            err,
            NiugenError::Application(ApplicationError::FormatterFailed { .. })
        ));
    }

    #[test]
    fn filesystem_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let err = service(renderer_ok(), fs, MockFormatter::new())
            .generate(&answers(), true)
            .unwrap_err();
        assert!(matches!(
            err,
            NiugenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
