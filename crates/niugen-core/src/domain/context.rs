//! Template data mapping and placeholder resolution.

use std::collections::BTreeMap;

use crate::domain::answers::GeneratorAnswers;
use crate::domain::dest::DerivedPaths;
use crate::domain::error::DomainError;
use crate::domain::kind::PackageKind;
use crate::domain::name::DEFAULT_SCOPE;

/// Manifest fragment appended when the package wants the UI framework as a
/// peer dependency. Leading comma keeps the surrounding JSON valid; prettier
/// reflows it afterwards.
const PEER_DEPS_FRAGMENT: &str = ",\n  \"peerDependencies\": {\n    \"react\": \">=18\",\n    \"react-dom\": \">=18\"\n  }";

/// Key/value context a template (or path template) renders against.
///
/// Keys use `{{UPPER_SNAKE}}` placeholders. Rendering is strict: a
/// placeholder with no matching key is an error, never silent passthrough —
/// a half-rendered manifest on disk is worse than an aborted run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical context for one generator invocation.
    pub fn for_package(answers: &GeneratorAnswers, derived: &DerivedPaths) -> Self {
        let scope = match answers.scope() {
            "" => DEFAULT_SCOPE,
            s => s,
        };
        let tsconfig_base = match answers.kind() {
            // packages/<name> → packages/configs/tsconfig
            PackageKind::Lib => "../configs/tsconfig/base.json",
            // packages/configs/<name> → packages/configs/tsconfig
            PackageKind::Config => "../tsconfig/base.json",
        };

        Self::new()
            .with("NAME", &derived.scoped_name)
            .with("SCOPE", scope)
            .with("FOLDER_NAME", &derived.folder_name)
            .with("PACKAGE_DIR", &derived.package_dir)
            .with("KIND", answers.kind().as_str())
            .with("TSCONFIG_BASE", tsconfig_base)
            .with(
                "PEER_DEPS",
                if answers.react() { PEER_DEPS_FRAGMENT } else { "" },
            )
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Resolve every `{{KEY}}` placeholder in `text`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::UnknownPlaceholder`] for a `{{KEY}}` with no value.
    /// - [`DomainError::UnterminatedPlaceholder`] for a `{{` never closed.
    pub fn render(&self, text: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(DomainError::UnterminatedPlaceholder {
                    text: snippet(&rest[start..]),
                });
            };
            let key = after[..end].trim();
            match self.vars.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(DomainError::UnknownPlaceholder {
                        name: key.to_string(),
                    });
                }
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn snippet(s: &str) -> String {
    const MAX: usize = 24;
    if s.len() <= MAX {
        s.to_string()
    } else {
        let cut = (1..=MAX).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0);
        format!("{}…", &s[..cut])
    }
}
