//! Tracing subscriber setup.
//!
//! The CLI is the composition root: it owns the subscriber. `niugen-core`
//! and `niugen-adapters` emit spans and events but never install anything.
//!
//! The verbosity flags translate to a per-crate filter — `-q` error, default
//! warn, `-v` info, `-vv` debug, `-vvv` trace — unless `RUST_LOG` is set, in
//! which case the environment wins outright.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates covered by the default filter, i.e. our own.
const CRATES: [&str; 3] = ["niugen_cli", "niugen_core", "niugen_adapters"];

/// Install the global subscriber. Call once, before the first event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => {
            let level = level_for(args);
            let directives: Vec<String> =
                CRATES.iter().map(|krate| format!("{krate}={level}")).collect();
            EnvFilter::new(directives.join(","))
        }
    };

    // Logs go to stderr so stdout stays clean for the report; colour only
    // when stderr is a real terminal and --no-color was not given.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(args: &GlobalArgs) -> &'static str {
    // quiet beats verbose; clap marks them as conflicting anyway.
    if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
