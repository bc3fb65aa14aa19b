//! Merge command implementation
//!
//! Runs the full load and prints the merged configuration model as YAML or
//! JSON, to stdout or to a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::info;

use faces_config::output::{emoji, OutputConfig};
use faces_config::rules::FacesConfig;

use super::{load_error, LoadArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MergeFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the merge command
#[derive(Args, Debug)]
pub struct MergeArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = MergeFormat::Yaml)]
    pub format: MergeFormat,

    /// Write the merged model to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Serializes the merged model.
pub fn render(config: &FacesConfig, format: MergeFormat) -> Result<String> {
    Ok(match format {
        MergeFormat::Yaml => serde_yaml::to_string(config)?,
        MergeFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)?;
            json.push('\n');
            json
        }
    })
}

/// Execute the merge command
pub fn execute(args: MergeArgs, output: &OutputConfig) -> Result<()> {
    let settings = args.load.settings()?;
    let loaded = faces_config::load(&settings).map_err(load_error)?;
    let rendered = render(&loaded.config, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Merged {} document(s)", loaded.documents.len());
            println!(
                "{} Wrote merged configuration to {}",
                emoji(output, "✅", "[OK]"),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
