//! Package kind value object.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of package being generated.
///
/// The kind determines the default destination root and which template
/// variant fills in kind-dependent slots (e.g. the tsconfig base path).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// A TypeScript library under `packages/`.
    #[default]
    Lib,
    /// A shared tooling config under `packages/configs/`.
    Config,
}

impl PackageKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::Config => "config",
        }
    }

    /// Destination root used when the user leaves the directory answer blank.
    pub const fn default_base_dir(&self) -> &'static str {
        match self {
            Self::Lib => "packages",
            Self::Config => "packages/configs",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lib" | "library" => Ok(Self::Lib),
            "config" => Ok(Self::Config),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(PackageKind::Lib.to_string(), "lib");
        assert_eq!(PackageKind::Config.to_string(), "config");
    }

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!("lib".parse::<PackageKind>().unwrap(), PackageKind::Lib);
        assert_eq!("library".parse::<PackageKind>().unwrap(), PackageKind::Lib);
        assert_eq!("LIB".parse::<PackageKind>().unwrap(), PackageKind::Lib);
        assert_eq!(
            "config".parse::<PackageKind>().unwrap(),
            PackageKind::Config
        );
    }

    #[test]
    fn from_str_unknown_errors() {
        assert!("app".parse::<PackageKind>().is_err());
        assert!("".parse::<PackageKind>().is_err());
    }

    #[test]
    fn default_base_dirs() {
        assert_eq!(PackageKind::Lib.default_base_dir(), "packages");
        assert_eq!(PackageKind::Config.default_base_dir(), "packages/configs");
    }

    #[test]
    fn default_kind_is_lib() {
        assert_eq!(PackageKind::default(), PackageKind::Lib);
    }
}
