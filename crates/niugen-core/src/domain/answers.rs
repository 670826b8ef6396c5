//! Collected generator answers.

use crate::domain::error::DomainError;
use crate::domain::kind::PackageKind;

/// The answers collected for one generator invocation.
///
/// Built once after prompt collection and immutable from then on. Derived
/// values (scoped name, folder name, package dir) live in
/// [`crate::domain::DerivedPaths`], produced by [`crate::domain::dest::resolve`];
/// they are never written back into this struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorAnswers {
    scope: String,
    name: String,
    kind: PackageKind,
    dir: Option<String>,
    react: bool,
}

impl GeneratorAnswers {
    /// Validate and freeze a set of answers.
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptyPackageName`] when `name` is empty after trimming.
    /// - [`DomainError::InvalidDestination`] when an explicit `dir` is
    ///   absolute or contains a `..` component. A blank `dir` is treated the
    ///   same as no `dir` at all (use the kind default).
    pub fn new(
        scope: impl Into<String>,
        name: impl Into<String>,
        kind: PackageKind,
        dir: Option<String>,
        react: bool,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::EmptyPackageName);
        }

        let dir = match dir.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(d) => {
                validate_dir(d)?;
                Some(d.to_string())
            }
        };

        Ok(Self {
            scope: scope.into().trim().to_string(),
            name,
            kind,
            dir,
            react,
        })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PackageKind {
        self.kind
    }

    /// Explicit destination override, if any. Already trimmed and non-empty.
    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref()
    }

    pub fn react(&self) -> bool {
        self.react
    }
}

/// Destination overrides must stay inside the workspace: relative, and no
/// `..` segments. Violations are rejected, not normalized.
fn validate_dir(dir: &str) -> Result<(), DomainError> {
    if dir.starts_with('/') || dir.starts_with('\\') || dir.contains(':') {
        return Err(DomainError::InvalidDestination {
            dir: dir.to_string(),
            reason: "must be relative to the repo root".to_string(),
        });
    }
    if dir.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(DomainError::InvalidDestination {
            dir: dir.to_string(),
            reason: "must not escape the repo root with '..'".to_string(),
        });
    }
    Ok(())
}
