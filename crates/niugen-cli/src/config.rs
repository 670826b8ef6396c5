//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config <file>` (must exist; failing to read it is an error)
//! 3. `.niugen.toml` in the current directory
//! 4. The user config dir (`directories::ProjectDirs`)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use niugen_core::domain::PackageKind;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for the package prompts.
    pub defaults: Defaults,
    /// Formatter settings.
    pub formatter: FormatterConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub scope: Option<String>,
    pub kind: Option<PackageKind>,
    pub react: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Disable to skip the format step on every run (same as `--no-format`).
    pub enabled: bool,
    /// Program + leading args; the file list is appended per invocation.
    pub command: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: ["pnpm", "-w", "exec", "prettier", "--write"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path that cannot be read or parsed is an
    /// error; the implicit locations are optional and silently skipped when
    /// absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context as _;

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Implicit config locations, local first.
    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".niugen.toml")];
        if let Some(dirs) = directories::ProjectDirs::from("dev", "niu", "niugen") {
            paths.push(dirs.config_dir().join("config.toml"));
        }
        paths
    }
}
