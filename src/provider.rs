//! # Resource Providers and Populators
//!
//! Descriptor documents reach the loader from two kinds of collaborators:
//!
//! - **`ResourceProvider`**: lists the URLs of descriptor files it knows
//!   about. Each provider runs as one discovery task.
//! - **`Populator`**: builds a descriptor programmatically by mutating a
//!   freshly created empty document.
//!
//! Both are traits so the loader can be driven by test doubles. The
//! implementations here cover the usual on-disk layouts:
//!
//! - `WebAppProvider`: the application descriptor under `WEB-INF` plus any
//!   extra config files configured for the application.
//! - `MetaInfProvider`: `META-INF/faces-config.xml` and
//!   `META-INF/*.faces-config.xml` found below one or more library roots.
//! - `GlobProvider`: files matching glob patterns.
//! - `StaticProvider`: a fixed list of URLs.
//!
//! Every provider returns its URLs in a deterministic order.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use url::Url;
use walkdir::WalkDir;

use crate::document::ConfigDocument;
use crate::error::{Error, Result};

/// Path of the application descriptor relative to the web root.
pub const APPLICATION_DESCRIPTOR: &str = "WEB-INF/faces-config.xml";

const META_INF: &str = "META-INF";
const META_INF_DESCRIPTOR: &str = "faces-config.xml";
const META_INF_SUFFIX: &str = ".faces-config.xml";

/// Source of descriptor URLs.
pub trait ResourceProvider: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Lists the descriptor URLs this provider contributes.
    fn resources(&self) -> Result<Vec<Url>>;
}

/// Programmatic source of one descriptor document.
pub trait Populator: Send + Sync {
    fn name(&self) -> &str;

    /// Adds content to `document`, an empty `faces-config` descriptor.
    fn populate(&self, document: &mut ConfigDocument) -> Result<()>;
}

/// Converts a filesystem path into a `file:` URL.
pub fn file_url(path: &Path) -> Result<Url> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Url::from_file_path(&absolute).map_err(|_| Error::Discovery {
        provider: "file".to_string(),
        message: format!("Cannot express {} as a file URL", absolute.display()),
    })
}

/// Provider returning a fixed list of URLs.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    name: String,
    urls: Vec<Url>,
}

impl StaticProvider {
    pub fn new(name: impl Into<String>, urls: Vec<Url>) -> Self {
        Self {
            name: name.into(),
            urls,
        }
    }
}

impl ResourceProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn resources(&self) -> Result<Vec<Url>> {
        Ok(self.urls.clone())
    }
}

/// Provider for the web application's own descriptors.
///
/// Returns the configured extra config files first, then the application
/// descriptor, so the application descriptor is always the last URL. An
/// extra entry that names the application descriptor itself is skipped.
#[derive(Debug, Clone)]
pub struct WebAppProvider {
    web_root: PathBuf,
    config_files: Vec<String>,
}

impl WebAppProvider {
    pub fn new(web_root: impl Into<PathBuf>) -> Self {
        Self {
            web_root: web_root.into(),
            config_files: Vec::new(),
        }
    }

    /// Adds extra config files, given relative to the web root. Entries may
    /// be comma-separated lists.
    pub fn with_config_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in files {
            for file in entry.as_ref().split(',') {
                let file = file.trim().trim_start_matches('/');
                if !file.is_empty() {
                    self.config_files.push(file.to_string());
                }
            }
        }
        self
    }
}

impl ResourceProvider for WebAppProvider {
    fn name(&self) -> &str {
        "web-app"
    }

    fn resources(&self) -> Result<Vec<Url>> {
        let mut urls = Vec::new();
        for file in &self.config_files {
            if file == APPLICATION_DESCRIPTOR {
                warn!(
                    "Ignoring {} in the configured config files; it is always loaded",
                    APPLICATION_DESCRIPTOR
                );
                continue;
            }
            let path = self.web_root.join(file);
            if !path.is_file() {
                return Err(Error::Discovery {
                    provider: self.name().to_string(),
                    message: format!("Configured config file not found: {}", path.display()),
                });
            }
            urls.push(file_url(&path)?);
        }

        let descriptor = self.web_root.join(APPLICATION_DESCRIPTOR);
        if descriptor.is_file() {
            urls.push(file_url(&descriptor)?);
        } else {
            debug!("No application descriptor at {}", descriptor.display());
        }
        Ok(urls)
    }
}

/// Provider scanning library roots for `META-INF` descriptors.
#[derive(Debug, Clone)]
pub struct MetaInfProvider {
    roots: Vec<PathBuf>,
}

impl MetaInfProvider {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    fn is_descriptor(path: &Path) -> bool {
        let in_meta_inf = path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|dir| dir == META_INF);
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        in_meta_inf && (file_name == META_INF_DESCRIPTOR || file_name.ends_with(META_INF_SUFFIX))
    }
}

impl ResourceProvider for MetaInfProvider {
    fn name(&self) -> &str {
        "meta-inf"
    }

    fn resources(&self) -> Result<Vec<Url>> {
        let mut urls = Vec::new();
        for root in &self.roots {
            if !root.is_dir() {
                debug!("No library root at {}", root.display());
                continue;
            }
            let walker = WalkDir::new(root).sort_by_file_name();
            for entry in walker {
                let entry = entry.map_err(|e| Error::Discovery {
                    provider: self.name().to_string(),
                    message: e.to_string(),
                })?;
                if entry.file_type().is_file() && Self::is_descriptor(entry.path()) {
                    urls.push(file_url(entry.path())?);
                }
            }
        }
        Ok(urls)
    }
}

/// Provider returning the files matching a set of glob patterns.
#[derive(Debug, Clone)]
pub struct GlobProvider {
    patterns: Vec<String>,
}

impl GlobProvider {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

impl ResourceProvider for GlobProvider {
    fn name(&self) -> &str {
        "glob"
    }

    fn resources(&self) -> Result<Vec<Url>> {
        let mut urls = Vec::new();
        for pattern in &self.patterns {
            let mut paths = Vec::new();
            for entry in glob::glob(pattern)? {
                let path = entry.map_err(|e| Error::Discovery {
                    provider: self.name().to_string(),
                    message: e.to_string(),
                })?;
                if path.is_file() {
                    paths.push(path);
                }
            }
            paths.sort();
            for path in paths {
                urls.push(file_url(&path)?);
            }
        }
        Ok(urls)
    }
}
