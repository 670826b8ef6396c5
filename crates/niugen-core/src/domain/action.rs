//! The action pipeline plan.
//!
//! The full set of step kinds is fixed and known in advance, so actions are
//! a closed enum dispatched by the generate service — not an open-ended
//! registration mechanism. Path templates render against the
//! [`crate::domain::TemplateContext`] before any filesystem operation.

use std::fmt;

/// Identifier of a built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// `package.json` — the primary record, always rewritten.
    Manifest,
    /// `tsconfig.json`.
    CompilerConfig,
    /// `src/index.ts`.
    EntrySource,
    /// `README.md`.
    Readme,
}

impl TemplateId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manifest => "package.json",
            Self::CompilerConfig => "tsconfig.json",
            Self::EntrySource => "src-index.ts",
            Self::Readme => "README.md",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path templates for the four generated files, relative to the repo root.
pub const MANIFEST_PATH: &str = "{{PACKAGE_DIR}}/package.json";
pub const COMPILER_CONFIG_PATH: &str = "{{PACKAGE_DIR}}/tsconfig.json";
pub const ENTRY_SOURCE_PATH: &str = "{{PACKAGE_DIR}}/src/index.ts";
pub const README_PATH: &str = "{{PACKAGE_DIR}}/README.md";

/// One step of the generator pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Render a template and write it to `path`.
    ///
    /// With `overwrite` false the step checks existence first and reports
    /// "skipped" instead of clobbering a file the developer customized.
    CreateFile {
        path: &'static str,
        template: TemplateId,
        overwrite: bool,
    },
    /// Run the external formatter over the rendered `files` list.
    ///
    /// An empty list means formatting was disabled for this run; the step
    /// reports "skipped" without spawning anything.
    Format { files: Vec<&'static str> },
}

/// Build the ordered pipeline for one invocation.
///
/// The manifest is always rewritten — it is the primary record of the
/// package's identity. Everything else is created only when absent, so
/// reruns never destroy developer customization.
pub fn plan(format: bool) -> Vec<Action> {
    let files = [
        MANIFEST_PATH,
        COMPILER_CONFIG_PATH,
        ENTRY_SOURCE_PATH,
        README_PATH,
    ];

    vec![
        Action::CreateFile {
            path: MANIFEST_PATH,
            template: TemplateId::Manifest,
            overwrite: true,
        },
        Action::CreateFile {
            path: COMPILER_CONFIG_PATH,
            template: TemplateId::CompilerConfig,
            overwrite: false,
        },
        Action::CreateFile {
            path: ENTRY_SOURCE_PATH,
            template: TemplateId::EntrySource,
            overwrite: false,
        },
        Action::CreateFile {
            path: README_PATH,
            template: TemplateId::Readme,
            overwrite: false,
        },
        Action::Format {
            files: if format { files.to_vec() } else { Vec::new() },
        },
    ]
}
