//! Interactive prompt sequence.
//!
//! Five ordered questions, each pre-filled from CLI flags / config where
//! available. The answers collapse into a validated
//! [`GeneratorAnswers`] — prompting is the only place a human can override
//! what a script passed on the command line.
//!
//! Compiled only with the `interactive` feature (on by default).

use dialoguer::{Input, Select, theme::ColorfulTheme};

use niugen_core::domain::{GeneratorAnswers, PackageKind};

use crate::commands::package::PromptDefaults;
use crate::error::{CliError, CliResult};

/// Run the prompt sequence and build validated answers.
pub fn collect(defaults: &PromptDefaults) -> CliResult<GeneratorAnswers> {
    let theme = ColorfulTheme::default();

    let scope: String = Input::with_theme(&theme)
        .with_prompt("Scope (without @)")
        .default(defaults.scope.clone())
        .interact_text()
        .map_err(prompt_err)?;

    let mut name_prompt = Input::with_theme(&theme)
        .with_prompt("Package name (e.g. foo or @niu/foo)")
        .allow_empty(true)
        .validate_with(|v: &String| -> Result<(), &str> {
            if v.trim().is_empty() {
                Err("Package name is required")
            } else {
                Ok(())
            }
        });
    if let Some(name) = &defaults.name {
        name_prompt = name_prompt.default(name.clone());
    }
    let name: String = name_prompt.interact_text().map_err(prompt_err)?;

    let kind_index = Select::with_theme(&theme)
        .with_prompt("Package kind")
        .items(&["lib (TS library)", "config (packages/configs/*)"])
        .default(match defaults.kind {
            PackageKind::Lib => 0,
            PackageKind::Config => 1,
        })
        .interact()
        .map_err(prompt_err)?;
    let kind = if kind_index == 1 {
        PackageKind::Config
    } else {
        PackageKind::Lib
    };

    let mut dir_prompt = Input::with_theme(&theme)
        .with_prompt("Destination directory (blank = default for chosen kind)")
        .allow_empty(true);
    if !defaults.dir.is_empty() {
        dir_prompt = dir_prompt.default(defaults.dir.clone());
    }
    let dir: String = dir_prompt.interact_text().map_err(prompt_err)?;

    let react_index = Select::with_theme(&theme)
        .with_prompt("Include React peerDependencies?")
        .items(&["No", "Yes"])
        .default(usize::from(defaults.react))
        .interact()
        .map_err(prompt_err)?;

    let dir = (!dir.trim().is_empty()).then(|| dir.trim().to_string());
    GeneratorAnswers::new(scope, name, kind, dir, react_index == 1)
        .map_err(|e| CliError::Core(e.into()))
}

fn prompt_err(err: dialoguer::Error) -> CliError {
    CliError::IoError {
        message: "interactive prompt failed".into(),
        source: std::io::Error::other(err),
    }
}
