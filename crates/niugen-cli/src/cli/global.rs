//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true` on each field, so
//! `niugen -v package` and `niugen package -v` both work.

use clap::Args;
use std::path::PathBuf;

/// Flags accepted on any invocation.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Turn off ANSI styling. Also honoured via the `NO_COLOR` environment
    /// variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from this file instead of the search path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// How to render stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for normal (non-log) output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Styled output even when piped.
    Human,
    /// Never emit ANSI codes.
    Plain,
}
