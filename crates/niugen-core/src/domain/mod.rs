//! Core domain layer for niugen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and process-spawning concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No external crates**: only std library + thiserror + serde derives
//! - **Immutable values**: answers and derived paths never mutate after
//!   construction; derived values travel in their own struct instead of
//!   being written back into the answers

// Public API - what the world sees
pub mod action;
pub mod answers;
pub mod context;
pub mod dest;
pub mod error;
pub mod kind;
pub mod name;

// Re-exports for convenience
pub use action::{Action, TemplateId, plan};
pub use answers::GeneratorAnswers;
pub use context::TemplateContext;
pub use dest::DerivedPaths;
pub use error::{DomainError, ErrorCategory};
pub use kind::PackageKind;
pub use name::{DEFAULT_SCOPE, to_folder_name, to_scoped_name};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Normalization laws (hold for any raw name / scope)
    // ========================================================================

    #[test]
    fn folder_name_is_scope_insensitive() {
        // to_folder_name(to_scoped_name(n, s)) == to_folder_name(n) for any
        // unscoped n and any scope s.
        for name in ["foo", "foo-bar", "widgets", "a"] {
            for scope in ["niu", "acme", "x"] {
                assert_eq!(
                    to_folder_name(&to_scoped_name(name, scope)),
                    to_folder_name(name),
                    "failed for name={name} scope={scope}"
                );
            }
        }
    }

    #[test]
    fn scoped_name_is_idempotent() {
        for name in ["foo", "@niu/foo", "@acme/widgets"] {
            let once = to_scoped_name(name, "niu");
            let twice = to_scoped_name(&once, "niu");
            assert_eq!(once, twice, "failed for name={name}");
        }
    }

    // ========================================================================
    // Destination resolution scenarios
    // ========================================================================

    #[test]
    fn lib_kind_resolves_under_packages() {
        let answers =
            GeneratorAnswers::new("niu", "foo-bar", PackageKind::Lib, None, false).unwrap();
        let derived = dest::resolve(&answers).unwrap();
        assert_eq!(derived.package_dir, "packages/foo-bar");
        assert_eq!(derived.scoped_name, "@niu/foo-bar");
        assert_eq!(derived.folder_name, "foo-bar");
    }

    #[test]
    fn config_kind_resolves_under_packages_configs() {
        // A literally-scoped name keeps its own scope; the scope answer is
        // only a fallback for bare names.
        let answers =
            GeneratorAnswers::new("niu", "@acme/widgets", PackageKind::Config, None, false)
                .unwrap();
        let derived = dest::resolve(&answers).unwrap();
        assert_eq!(derived.scoped_name, "@acme/widgets");
        assert_eq!(derived.folder_name, "widgets");
        assert_eq!(derived.package_dir, "packages/configs/widgets");
    }

    #[test]
    fn explicit_dir_wins_over_kind_default() {
        for kind in [PackageKind::Lib, PackageKind::Config] {
            let answers =
                GeneratorAnswers::new("niu", "foo", kind, Some("tools/internal".into()), false)
                    .unwrap();
            let derived = dest::resolve(&answers).unwrap();
            assert_eq!(derived.package_dir, "tools/internal/foo");
        }
    }

    #[test]
    fn empty_name_is_rejected_at_construction() {
        for raw in ["", "   ", "\t"] {
            let err = GeneratorAnswers::new("niu", raw, PackageKind::Lib, None, false).unwrap_err();
            assert!(matches!(err, DomainError::EmptyPackageName));
        }
    }

    #[test]
    fn scope_marker_without_local_name_is_rejected() {
        // "@acme" normalizes to an empty folder name; resolution must refuse
        // it rather than produce "packages/".
        let answers = GeneratorAnswers::new("niu", "@acme", PackageKind::Lib, None, false).unwrap();
        assert!(matches!(
            dest::resolve(&answers),
            Err(DomainError::EmptyPackageName)
        ));
    }
}
