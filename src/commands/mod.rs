//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `faces-config` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! All commands load descriptors the same way, so the settings options live
//! here in [`LoadArgs`] and are flattened into each command.

pub mod info;
pub mod merge;
pub mod order;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use faces_config::config::{Settings, SETTINGS_FILE};
use faces_config::error::Error;
use faces_config::suggestions;

/// Options shared by every command that loads descriptors.
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Path to the settings file
    #[arg(short, long, value_name = "PATH", env = "FACES_CONFIG_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Web application root (overrides the settings file)
    #[arg(long, value_name = "DIR")]
    pub web_root: Option<PathBuf>,

    /// Run discovery and parsing on a worker pool
    #[arg(long)]
    pub parallel: bool,

    /// Worker count for --parallel (0 = one per CPU)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Reject documents whose root element is not faces-config
    #[arg(long)]
    pub validating: bool,
}

impl LoadArgs {
    /// Reads the settings file and applies the command-line overrides.
    ///
    /// Without an explicit settings path, a missing `.faces-config.yaml` is
    /// fine as long as `--web-root` is given.
    pub fn settings(&self) -> Result<Settings> {
        let path = self
            .settings
            .clone()
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));

        let mut settings = if path.is_file() {
            Settings::from_file(&path)?
        } else if self.settings.is_none() && self.web_root.is_some() {
            Settings::default()
        } else {
            return Err(suggestions::settings_not_found(&path));
        };

        if let Some(web_root) = &self.web_root {
            settings.web_root = Some(web_root.clone());
        }
        if self.parallel {
            settings.parallel = true;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        if self.validating {
            settings.validating = true;
        }

        if settings.providers().is_empty() {
            return Err(suggestions::no_sources());
        }
        Ok(settings)
    }
}

/// Converts a load error, adding hints where one helps.
pub fn load_error(error: Error) -> anyhow::Error {
    match error {
        Error::OrderingCycle { cycle } => suggestions::ordering_cycle(&cycle),
        other => other.into(),
    }
}
