//! Package name normalization.
//!
//! # Design
//!
//! Two pure functions map a raw user-supplied identifier to the two forms
//! the generator needs: a scope-qualified package name (`@scope/local`) and
//! a bare folder name usable as a single path segment.
//!
//! Both functions treat an empty (or whitespace-only) input as "invalid" and
//! return an empty string; the caller turns that into a validation failure.
//! Normalization is idempotent, so a name re-entered by a script passes
//! through unchanged.

/// Namespace prefix marker, as in `@niu/foo`.
pub const SCOPE_MARKER: char = '@';

/// Separator between scope and local name.
pub const SCOPE_SEPARATOR: char = '/';

/// Scope used when the caller supplies none.
pub const DEFAULT_SCOPE: &str = "niu";

/// Convert a user-provided name into a safe folder name.
///
/// - `"@niu/foo-bar"` -> `"foo-bar"`
/// - `"foo-bar"` -> `"foo-bar"`
/// - `"@niu"` -> `""` (no local name; caller rejects)
pub fn to_folder_name(raw: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        return String::new();
    }
    if name.starts_with(SCOPE_MARKER) {
        return name
            .splitn(2, SCOPE_SEPARATOR)
            .nth(1)
            .unwrap_or_default()
            .to_string();
    }
    name.to_string()
}

/// Ensure we always generate a scoped package name.
///
/// - `"foo"` -> `"@niu/foo"`
/// - `"@niu/foo"` -> `"@niu/foo"`
///
/// A name that already carries a scope marker is returned unchanged: the
/// literal scope the user typed is authoritative and overrides `scope`.
pub fn to_scoped_name(raw: &str, scope: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        return String::new();
    }
    if name.starts_with(SCOPE_MARKER) {
        return name.to_string();
    }
    format!("{SCOPE_MARKER}{scope}{SCOPE_SEPARATOR}{name}")
}
