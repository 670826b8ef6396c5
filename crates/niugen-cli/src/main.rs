//! # niugen
//!
//! Workspace package scaffolding for the niu monorepo.
//!
//! `main` wires the layers together in a fixed order: parse flags, install
//! the tracing subscriber, load config, build the output manager, dispatch
//! to the subcommand, and finally turn any [`CliError`] into a message plus
//! exit code. Nothing below `main` ever calls `std::process::exit`.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompt;

fn main() -> ExitCode {
    // A .env next to the repo root may carry RUST_LOG etc.; absence is fine.
    let _ = dotenvy::dotenv();

    // Clap reports --help and --version through the Err path too, but those
    // belong on stdout with exit 0; only real parse failures exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => {
            info!("niugen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Load config, build the output manager, and dispatch the subcommand.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })?;

    let output = OutputManager::new(&cli.global, &config);

    match cli.command {
        Commands::Package(cmd) => commands::package::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// The single spot where a structured error becomes text and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Straight to stderr so the message survives stdout redirection; colour
    // only when stderr is really a terminal.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's self-check: conflicting args, missing values, bad defaults.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn config_failure_maps_to_exit_4() {
        let err = CliError::ConfigError {
            message: "unreadable".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }
}
