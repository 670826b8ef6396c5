//! External formatter adapter.
//!
//! Spawns the workspace's prettier through pnpm and blocks until it exits.
//! Stdio is inherited, so an operator running interactively sees prettier's
//! own progress and diagnostics directly.

use std::path::PathBuf;
use std::process::Command;

use niugen_core::{
    application::{ApplicationError, ports::Formatter},
    error::NiugenResult,
};
use tracing::{debug, info};

/// Default invocation: `pnpm -w exec prettier --write <files…>`.
const DEFAULT_COMMAND: &[&str] = &["pnpm", "-w", "exec", "prettier", "--write"];

/// Formatter that shells out to prettier.
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
    command: Vec<String>,
}

impl PrettierFormatter {
    /// Formatter using the default pnpm/prettier invocation.
    pub fn new() -> Self {
        Self::with_command(DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect())
    }

    /// Formatter using a custom command line (program + leading args).
    /// The file list is appended to `command` on every call.
    pub fn with_command(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Default for PrettierFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for PrettierFormatter {
    fn format(&self, files: &[PathBuf]) -> NiugenResult<()> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(ApplicationError::FormatterFailed {
                reason: "formatter command is empty".into(),
            }
            .into());
        };

        info!(program = %program, files = files.len(), "running formatter");
        debug!(command = ?self.command, "formatter command line");

        let status = Command::new(program)
            .args(args)
            .args(files)
            .status()
            .map_err(|e| ApplicationError::FormatterFailed {
                reason: format!("failed to run '{program}': {e}"),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::FormatterFailed {
                reason: format!("'{program}' exited with {status}"),
            }
            .into())
        }
    }
}
