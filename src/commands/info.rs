//! # Info Command Implementation
//!
//! Displays what a load would use and what it produces: the configured
//! providers and execution mode, the application descriptor summary and a
//! count of each merged record type.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;

use faces_config::config::Settings;
use faces_config::output::{emoji, OutputConfig};
use faces_config::phases::orchestrator::LoadedConfig;

use super::{load_error, LoadArgs};

/// Show information about the descriptors a load would merge
#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

/// Execute the `info` command.
pub fn execute(args: InfoArgs, output: &OutputConfig) -> Result<()> {
    let settings = args.load.settings()?;
    let loaded = faces_config::load(&settings).map_err(load_error)?;
    print!("{}", describe(&settings, &loaded, output));
    Ok(())
}

/// Formats the report printed by `info`.
pub fn describe(settings: &Settings, loaded: &LoadedConfig, output: &OutputConfig) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        emoji(output, "📋", "[INFO]"),
        output.heading("Sources")
    ));
    for provider in settings.providers() {
        lines.push(format!("  - {}", provider.name()));
    }
    let mode = if settings.parallel {
        match settings.threads {
            0 => "parallel".to_string(),
            threads => format!("parallel ({} threads)", threads),
        }
    } else {
        "inline".to_string()
    };
    lines.push(format!("  Execution: {}", mode));
    lines.push(String::new());

    let summary = &loaded.documents.summary;
    lines.push(output.heading("Application descriptor"));
    lines.push(format!(
        "  Present: {}",
        if summary.is_application_descriptor { "yes" } else { "no" }
    ));
    lines.push(format!("  Version: {}", summary.version));
    lines.push(format!("  Metadata complete: {}", summary.metadata_complete));
    lines.push(format!(
        "  Absolute ordering: {}",
        summary
            .absolute_ordering
            .as_ref()
            .map(|names| names.join(", "))
            .unwrap_or_else(|| "none".to_string())
    ));
    lines.push(String::new());

    let config = &loaded.config;
    lines.push(output.heading("Merged configuration"));
    lines.push(format!("  Documents: {}", loaded.documents.len()));
    lines.push(format!("  Managed beans: {}", config.managed_beans.len()));
    lines.push(format!("  Validators: {}", config.validators.len()));
    lines.push(format!("  Referenced beans: {}", config.referenced_beans.len()));
    lines.push(format!("  Navigation rules: {}", config.navigation_rules.len()));
    lines.push(format!(
        "  Resource bundles: {}",
        config.application.resource_bundles.len()
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
