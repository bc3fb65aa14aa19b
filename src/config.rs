//! # Loader Settings
//!
//! This module defines the `.faces-config.yaml` file that tells the loader
//! where to look for descriptor documents and how to run.
//!
//! ## Example
//!
//! ```yaml
//! web_root: webapp
//! config_files: "WEB-INF/navigation.xml, WEB-INF/beans.xml"
//! meta_inf_roots:
//!   - lib
//! patterns:
//!   - "extra/*.xml"
//! parallel: true
//! threads: 4
//! validating: true
//! ```
//!
//! Every key is optional. Unknown keys are rejected, with a suggestion when
//! the key looks like a typo of a known one. Relative paths are resolved
//! against the directory of the settings file.
//!
//! ## Building a Loader
//!
//! `Settings::documents` turns the settings into a ready-to-run
//! [`Documents`](crate::phases::orchestrator::Documents): one provider per
//! configured source, the XML parser and an executor.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::parser::XmlDocumentParser;
use crate::phases::orchestrator::Documents;
use crate::provider::{
    GlobProvider, MetaInfProvider, ResourceProvider, WebAppProvider, APPLICATION_DESCRIPTOR,
};
use crate::suggestions;

/// Default settings file name.
pub const SETTINGS_FILE: &str = ".faces-config.yaml";

const KNOWN_KEYS: &[&str] = &[
    "web_root",
    "config_files",
    "meta_inf_roots",
    "patterns",
    "application_descriptor",
    "parallel",
    "threads",
    "validating",
];

/// Either a single comma-separated string or a list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ConfigFiles {
    Joined(String),
    List(Vec<String>),
}

impl Default for ConfigFiles {
    fn default() -> Self {
        ConfigFiles::List(Vec::new())
    }
}

impl ConfigFiles {
    pub fn entries(&self) -> Vec<&str> {
        match self {
            ConfigFiles::Joined(joined) => vec![joined.as_str()],
            ConfigFiles::List(list) => list.iter().map(String::as_str).collect(),
        }
    }
}

/// Loader settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Root of the web application; enables the `WEB-INF` provider.
    #[serde(default)]
    pub web_root: Option<PathBuf>,

    /// Extra descriptors relative to the web root.
    #[serde(default)]
    pub config_files: ConfigFiles,

    /// Library roots scanned for `META-INF` descriptors.
    #[serde(default)]
    pub meta_inf_roots: Vec<PathBuf>,

    /// Glob patterns for further descriptors.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Path suffix identifying the application descriptor.
    #[serde(default = "default_application_descriptor")]
    pub application_descriptor: String,

    /// Run discovery and parsing on a worker pool.
    #[serde(default)]
    pub parallel: bool,

    /// Worker count; 0 picks one per CPU.
    #[serde(default)]
    pub threads: usize,

    /// Check the root element of every document.
    #[serde(default)]
    pub validating: bool,
}

pub fn default_application_descriptor() -> String {
    APPLICATION_DESCRIPTOR.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            web_root: None,
            config_files: ConfigFiles::default(),
            meta_inf_roots: Vec::new(),
            patterns: Vec::new(),
            application_descriptor: default_application_descriptor(),
            parallel: false,
            threads: 0,
            validating: false,
        }
    }
}

impl Settings {
    /// Parses settings from YAML. An empty document yields the defaults.
    pub fn parse(yaml_content: &str) -> Result<Self> {
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml_content).map_err(settings_error)
    }

    /// Reads a settings file and resolves its relative paths against the
    /// file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let settings = Self::parse(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(settings.resolve_paths(base))
    }

    /// Makes relative paths absolute against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |path: &Path| -> PathBuf {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                base.join(path)
            }
        };
        self.web_root = self.web_root.as_deref().map(resolve);
        self.meta_inf_roots = self
            .meta_inf_roots
            .iter()
            .map(|root| resolve(root.as_path()))
            .collect();
        self.patterns = self
            .patterns
            .iter()
            .map(|pattern| resolve(Path::new(pattern)).to_string_lossy().into_owned())
            .collect();
        self
    }

    /// One provider per configured source, in a fixed order: web
    /// application, `META-INF` roots, glob patterns.
    pub fn providers(&self) -> Vec<Arc<dyn ResourceProvider>> {
        let mut providers: Vec<Arc<dyn ResourceProvider>> = Vec::new();
        if let Some(web_root) = &self.web_root {
            providers.push(Arc::new(
                WebAppProvider::new(web_root).with_config_files(self.config_files.entries()),
            ));
        }
        if !self.meta_inf_roots.is_empty() {
            providers.push(Arc::new(MetaInfProvider::new(self.meta_inf_roots.clone())));
        }
        if !self.patterns.is_empty() {
            providers.push(Arc::new(GlobProvider::new(self.patterns.clone())));
        }
        providers
    }

    pub fn executor(&self) -> Result<Executor> {
        if self.parallel {
            Executor::pool(self.threads)
        } else {
            Ok(Executor::Inline)
        }
    }

    /// Builds the loader described by these settings.
    pub fn documents(&self) -> Result<Documents> {
        Ok(Documents::new()
            .with_providers(self.providers())
            .with_parser(Arc::new(XmlDocumentParser::new(self.validating)))
            .with_executor(self.executor()?)
            .with_application_descriptor(self.application_descriptor.clone()))
    }
}

fn settings_error(error: serde_yaml::Error) -> Error {
    let message = error.to_string();
    let hint = unknown_key(&message)
        .and_then(|key| suggestions::find_similar(key, KNOWN_KEYS))
        .map(|known| format!("did you mean `{}`?", known));
    Error::Settings { message, hint }
}

/// Extracts the key from serde's "unknown field `key`" message.
fn unknown_key(message: &str) -> Option<&str> {
    const MARKER: &str = "unknown field `";
    let start = message.find(MARKER)? + MARKER.len();
    message[start..].split('`').next()
}
