//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use faces_config::output::OutputConfig;

use crate::commands;

/// Faces Config - Discover, order and merge faces-config descriptors
#[derive(Parser, Debug)]
#[command(name = "faces-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the order in which descriptors are merged
    Order(commands::order::OrderArgs),

    /// Print the merged configuration model
    Merge(commands::merge::MergeArgs),

    /// Show information about the descriptors a load would merge
    Info(commands::info::InfoArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        console::set_colors_enabled(output.use_color);
        console::set_colors_enabled_stderr(output.use_color);

        match self.command {
            Commands::Order(args) => commands::order::execute(args, &output),
            Commands::Merge(args) => commands::merge::execute(args, &output),
            Commands::Info(args) => commands::info::execute(args, &output),
        }
    }
}

/// Logs go to stderr. `RUST_LOG`, when set, takes precedence over
/// `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
