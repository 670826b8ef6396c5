//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use niugen_core::domain::PackageKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "niugen",
    bin_name = "niugen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Workspace package scaffolding for the niu monorepo",
    long_about = "Niugen creates new workspace packages with the manifest, \
                  tsconfig, entry source and readme wired the same way every \
                  time, then runs prettier over what it wrote.",
    after_help = "EXAMPLES:\n\
        \x20 niugen package                                  # fully interactive\n\
        \x20 niugen package --name foo-bar --kind lib --yes\n\
        \x20 niugen package --name @niu/eslint-config --kind config --yes\n\
        \x20 niugen completions zsh > ~/.zfunc/_niugen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new workspace package.
    #[command(
        visible_alias = "p",
        about = "Generate a new workspace package (default @niu/*)",
        after_help = "EXAMPLES:\n\
            \x20 niugen package --name foo --kind lib --yes\n\
            \x20 niugen package --name widgets --kind config --dir packages/configs --yes\n\
            \x20 niugen package --name ui-kit --react --yes\n\n\
            Any flag left out falls back to an interactive prompt."
    )]
    Package(PackageArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 niugen completions bash > ~/.local/share/bash-completion/completions/niugen\n\
            \x20 niugen completions zsh  > ~/.zfunc/_niugen\n\
            \x20 niugen completions fish > ~/.config/fish/completions/niugen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── package ───────────────────────────────────────────────────────────────────

/// Arguments for `niugen package`.
///
/// Every value is optional: anything missing is asked for interactively,
/// with the flag value (when given) pre-filled as the prompt default, so a
/// script can pass everything and a human can pass nothing.
#[derive(Debug, Args)]
pub struct PackageArgs {
    /// Package scope, without the leading `@`.
    #[arg(long = "scope", value_name = "SCOPE", help = "Scope (without @)")]
    pub scope: Option<String>,

    /// Package name, bare (`foo`) or already scoped (`@niu/foo`).
    #[arg(
        long = "name",
        value_name = "NAME",
        help = "Package name (e.g. foo or @niu/foo)"
    )]
    pub name: Option<String>,

    /// Package kind.
    #[arg(long = "kind", value_name = "KIND", value_enum, help = "Package kind")]
    pub kind: Option<KindArg>,

    /// Destination directory, relative to the repo root.
    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Destination directory (blank = default for the chosen kind)"
    )]
    pub dir: Option<String>,

    /// Include React peerDependencies.
    ///
    /// A bare `--react` (no value) means true; `--react false` disables it.
    /// Anything that is not (case-insensitively) `true` counts as false.
    #[arg(
        long = "react",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Include React peerDependencies"
    )]
    pub react: Option<String>,

    /// Accept all defaults without prompting.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Accept defaults without prompting (requires --name)"
    )]
    pub yes: bool,

    /// Skip the prettier pass over the generated files.
    #[arg(long = "no-format", help = "Skip formatting the generated files")]
    pub no_format: bool,
}

impl PackageArgs {
    /// Collapse the tri-state `--react` value to a boolean intent flag.
    ///
    /// `None` means the flag was never supplied, so prompt defaults may still
    /// fall back to the configured default.
    pub fn react_intent(&self) -> Option<bool> {
        self.react
            .as_deref()
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `niugen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Package kinds as they appear on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    /// TS library under `packages/`.
    #[value(alias = "library")]
    Lib,
    /// Shared config under `packages/configs/`.
    Config,
}

impl From<KindArg> for PackageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Lib => PackageKind::Lib,
            KindArg::Config => PackageKind::Config,
        }
    }
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lib => write!(f, "lib"),
            Self::Config => write!(f, "config"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
