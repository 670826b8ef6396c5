//! Destination resolution.
//!
//! Computes where a package lands on disk and under what identity. Paths are
//! always joined with forward slashes — they end up in manifests and docs
//! that are read on every host OS.

use crate::domain::answers::GeneratorAnswers;
use crate::domain::error::DomainError;
use crate::domain::name::{DEFAULT_SCOPE, to_folder_name, to_scoped_name};

/// Values derived from [`GeneratorAnswers`], passed forward through the
/// pipeline alongside the answers instead of being mutated into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    /// Full package identity, `@scope/name`.
    pub scoped_name: String,
    /// Single filesystem segment, never scoped.
    pub folder_name: String,
    /// Repo-root-relative directory, forward slashes only.
    pub package_dir: String,
}

/// Derive the package identity and destination directory.
///
/// An explicit non-empty `dir` answer always wins over the kind default.
pub fn resolve(answers: &GeneratorAnswers) -> Result<DerivedPaths, DomainError> {
    let scope = match answers.scope() {
        "" => DEFAULT_SCOPE,
        s => s,
    };

    let scoped_name = to_scoped_name(answers.name(), scope);
    let folder_name = to_folder_name(&scoped_name);
    if folder_name.is_empty() {
        // "@scope" with no local half normalizes to empty.
        return Err(DomainError::EmptyPackageName);
    }

    let base_dir = answers
        .dir()
        .unwrap_or_else(|| answers.kind().default_base_dir());
    let package_dir = join(base_dir, &folder_name);

    Ok(DerivedPaths {
        scoped_name,
        folder_name,
        package_dir,
    })
}

/// Forward-slash join, regardless of host path conventions.
fn join(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{segment}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kind::PackageKind;

    fn resolve_with(
        scope: &str,
        name: &str,
        kind: PackageKind,
        dir: Option<&str>,
    ) -> DerivedPaths {
        let answers =
            GeneratorAnswers::new(scope, name, kind, dir.map(str::to_string), false).unwrap();
        resolve(&answers).unwrap()
    }

    #[test]
    fn lib_defaults_to_packages_root() {
        let d = resolve_with("niu", "foo-bar", PackageKind::Lib, None);
        assert_eq!(d.package_dir, "packages/foo-bar");
        assert!(d.package_dir.starts_with("packages/"));
    }

    #[test]
    fn config_defaults_to_configs_root() {
        let d = resolve_with("niu", "foo", PackageKind::Config, None);
        assert_eq!(d.package_dir, "packages/configs/foo");
        assert!(d.package_dir.starts_with("packages/configs/"));
    }

    #[test]
    fn empty_scope_falls_back_to_default() {
        let d = resolve_with("", "foo", PackageKind::Lib, None);
        assert_eq!(d.scoped_name, "@niu/foo");
    }

    #[test]
    fn prescoped_name_keeps_its_scope_and_folder() {
        let d = resolve_with("niu", "@acme/widgets", PackageKind::Config, None);
        assert_eq!(d.scoped_name, "@acme/widgets");
        assert_eq!(d.folder_name, "widgets");
        assert_eq!(d.package_dir, "packages/configs/widgets");
    }

    #[test]
    fn explicit_dir_overrides_both_kinds() {
        for kind in [PackageKind::Lib, PackageKind::Config] {
            let d = resolve_with("niu", "foo", kind, Some("custom/place"));
            assert_eq!(d.package_dir, "custom/place/foo");
        }
    }

    #[test]
    fn trailing_slash_in_dir_does_not_double() {
        let d = resolve_with("niu", "foo", PackageKind::Lib, Some("tools/"));
        assert_eq!(d.package_dir, "tools/foo");
    }
}
