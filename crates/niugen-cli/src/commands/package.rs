//! Implementation of the `niugen package` command.
//!
//! Responsibility: resolve prompt defaults from flags and config, collect
//! answers (interactively or not), wire up the adapters, and display the
//! pipeline report. No generation logic lives here.

use std::io::IsTerminal as _;

use tracing::{debug, info, instrument};

use niugen_adapters::{BuiltinRenderer, LocalFilesystem, PrettierFormatter};
use niugen_core::{
    application::GenerateService,
    domain::{DEFAULT_SCOPE, GeneratorAnswers, PackageKind},
};

use crate::{
    cli::{GlobalArgs, PackageArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Defaults for the prompt sequence, already merged from CLI flags, config
/// file, and hardcoded fallbacks (in that priority order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults {
    pub scope: String,
    pub name: Option<String>,
    pub kind: PackageKind,
    pub dir: String,
    pub react: bool,
}

impl PromptDefaults {
    pub fn from_sources(args: &PackageArgs, config: &AppConfig) -> Self {
        Self {
            scope: args
                .scope
                .clone()
                .or_else(|| config.defaults.scope.clone())
                .unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            name: args.name.clone(),
            kind: args
                .kind
                .map(PackageKind::from)
                .or(config.defaults.kind)
                .unwrap_or_default(),
            dir: args.dir.clone().unwrap_or_default(),
            react: args
                .react_intent()
                .or(config.defaults.react)
                .unwrap_or(false),
        }
    }

    /// Accept the defaults as-is (the `--yes` / non-TTY path).
    ///
    /// Validation lives in [`GeneratorAnswers::new`]; a missing name fails
    /// there with the same message the prompt validator shows.
    pub fn into_answers(self) -> CliResult<GeneratorAnswers> {
        let dir = (!self.dir.is_empty()).then_some(self.dir);
        GeneratorAnswers::new(self.scope, self.name.unwrap_or_default(), self.kind, dir, self.react)
            .map_err(|e| CliError::Core(e.into()))
    }
}

/// Execute the `niugen package` command.
///
/// Dispatch sequence:
/// 1. Merge flag/config/fallback values into prompt defaults
/// 2. Collect answers — interactive prompts unless `--yes` or piped stdin
/// 3. Compose the adapters and run the pipeline
/// 4. Print the per-step report and next-steps guidance
#[instrument(skip_all)]
pub fn execute(
    args: PackageArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format = !args.no_format && config.formatter.enabled;
    let defaults = PromptDefaults::from_sources(&args, &config);

    // Flags only pre-fill the prompts; a human can still override each one.
    let interactive = !args.yes && std::io::stdin().is_terminal();
    let answers = if interactive {
        collect_interactive(&defaults)?
    } else {
        defaults.into_answers()?
    };

    debug!(
        name = %answers.name(),
        kind = %answers.kind(),
        react = answers.react(),
        dir = answers.dir().unwrap_or("<kind default>"),
        format,
        "answers collected"
    );

    let service = GenerateService::new(
        Box::new(BuiltinRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(PrettierFormatter::with_command(
            config.formatter.command.clone(),
        )),
    );

    output.header(&format!("Generating '{}'...", answers.name()))?;
    info!(package = %answers.name(), "generation started");

    let report = service.generate(&answers, format)?;

    for outcome in &report.outcomes {
        output.print(&format!("  {outcome}"))?;
    }
    output.success(&format!(
        "{} ready at {}",
        report.derived.scoped_name, report.derived.package_dir
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  pnpm install")?;
        output.print(&format!("  $EDITOR {}/src/index.ts", report.derived.package_dir))?;
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn collect_interactive(defaults: &PromptDefaults) -> CliResult<GeneratorAnswers> {
    crate::prompt::collect(defaults)
}

#[cfg(not(feature = "interactive"))]
fn collect_interactive(_defaults: &PromptDefaults) -> CliResult<GeneratorAnswers> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
