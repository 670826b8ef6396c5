//! Terminal output for the happy path.
//!
//! Everything user-facing on stdout funnels through [`OutputManager`], which
//! is where the quiet flag and colour rules are enforced. Errors are the one
//! exception: they must stay visible even under `--quiet`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes status lines to stdout, honouring `--quiet` and the colour flags.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Merge flags and config into a ready-to-use writer.
    ///
    /// `Auto` collapses here: human styling on a TTY, plain otherwise.
    /// Colour is off if either the flag or the config file says so.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            color: !(args.no_color || config.output.no_color),
            term: Term::stdout(),
        }
    }

    /// Plain line, dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_tagged('\u{2713}', msg, |s| s.green().bold().to_string(), |s| {
            s.green().to_string()
        })
    }

    /// `✗ <msg>` in red. Never dropped: failures must be visible even when
    /// the rest of the output is silenced.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.write_tagged('\u{2717}', msg, |s| s.red().bold().to_string(), |s| {
            s.red().to_string()
        })
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write_tagged('\u{2139}', msg, |s| s.blue().bold().to_string(), |s| {
            s.blue().to_string()
        })
    }

    /// Section header, bold cyan.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    fn write_tagged(
        &self,
        icon: char,
        msg: &str,
        paint_icon: impl Fn(&str) -> String,
        paint_msg: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        let icon = icon.to_string();
        let line = if self.color {
            format!("{} {}", paint_icon(&icon), paint_msg(msg))
        } else {
            format!("{icon} {msg}")
        };
        self.term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The format after `Auto` has been resolved.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
