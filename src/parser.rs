//! # Document Parsing
//!
//! The `DocumentParser` trait turns one discovered URL into a
//! `ConfigDocument`. `XmlDocumentParser` is the default implementation: it
//! reads `file:` URLs from disk and parses them with `xot`.
//!
//! In validating mode the parser also checks the descriptor's grammar. A
//! root element other than `faces-config` is fatal; an unrecognised root
//! namespace is only logged, and the document is used as-is.

use std::fs;

use log::{debug, warn};
use url::Url;

use crate::document::{ConfigDocument, KNOWN_NAMESPACES, ROOT_ELEMENT};
use crate::error::{Error, Result};

/// Parses one descriptor URL into a document.
pub trait DocumentParser: Send + Sync {
    fn parse(&self, url: &Url) -> Result<ConfigDocument>;
}

/// Parser for descriptor files on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct XmlDocumentParser {
    validating: bool,
}

impl XmlDocumentParser {
    pub fn new(validating: bool) -> Self {
        Self { validating }
    }

    fn read(url: &Url) -> Result<String> {
        if url.scheme() != "file" {
            return Err(Error::Parse {
                uri: url.to_string(),
                message: format!("Unsupported URL scheme '{}'", url.scheme()),
            });
        }
        let path = url.to_file_path().map_err(|_| Error::Parse {
            uri: url.to_string(),
            message: "URL does not name a local file".to_string(),
        })?;
        fs::read_to_string(&path).map_err(|e| Error::Parse {
            uri: url.to_string(),
            message: e.to_string(),
        })
    }

    fn validate(document: &ConfigDocument) -> Result<()> {
        let root = document.root();
        let name = document.local_name(root);
        if name != ROOT_ELEMENT {
            return Err(Error::InvalidDocument {
                uri: document.system_id(),
                message: format!("expected <{}> root element, found <{}>", ROOT_ELEMENT, name),
            });
        }

        let namespace = document.namespace(root);
        if !namespace.is_empty() && !KNOWN_NAMESPACES.contains(&namespace) {
            warn!(
                "Unknown grammar '{}' in {}; continuing without validation",
                namespace,
                document.system_id()
            );
        }
        Ok(())
    }
}

impl DocumentParser for XmlDocumentParser {
    fn parse(&self, url: &Url) -> Result<ConfigDocument> {
        debug!("Parsing {}", url);
        let text = Self::read(url)?;
        let document = ConfigDocument::parse(&text, Some(url.clone()))?;
        if self.validating {
            Self::validate(&document)?;
        }
        Ok(document)
    }
}
