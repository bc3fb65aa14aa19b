//! # Error Handling
//!
//! This module defines the centralized error type for configuration loading.
//! It uses the `thiserror` library to derive a single `Error` enum covering
//! every failure mode of discovery, parsing, ordering and merging.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all possible failures. Every variant is fatal
//!   for a configuration load: loading is an all-or-nothing, startup-time
//!   operation and nothing is retried.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Failures fall into four groups:
//!
//! - Discovery and parse failures (`Discovery`, `Parse`, `Interrupted`,
//!   `InvalidDocument`, `Populator`).
//! - Ordering constraint violations (`MultipleAbsoluteOrdering`,
//!   `DuplicateOthers`, `OrderingCycle`, `ConflictingOthers`).
//! - Bean validation failures (`MissingField`, `ConflictingEntries`), which
//!   carry the document location when one is available.
//! - Ambient failures (`Settings`, `InvalidVersion`, `LockPoisoned` and the
//!   wrapped library errors).

use thiserror::Error;

/// Main error type for faces-config operations
#[derive(Error, Debug)]
pub enum Error {
    /// A resource provider failed to list its documents.
    #[error("Resource discovery failed for provider {provider}: {message}")]
    Discovery { provider: String, message: String },

    /// A document could not be read or parsed.
    #[error("Unable to parse document {uri}: {message}")]
    Parse { uri: String, message: String },

    /// A document parsed but is not a usable descriptor.
    #[error("Invalid descriptor {uri}: {message}")]
    InvalidDocument { uri: String, message: String },

    /// A submitted task never delivered its result, because its worker
    /// panicked or the pool dropped it.
    #[error("Task interrupted before completion: {task}")]
    Interrupted { task: String },

    /// A programmatic populator failed to build its document.
    #[error("Populator {populator} failed: {message}")]
    Populator { populator: String, message: String },

    /// The root `version` attribute is not a number.
    #[error("Invalid descriptor version '{value}' in {uri}")]
    InvalidVersion { value: String, uri: String },

    /// More than one `<absolute-ordering>` element in the application descriptor.
    #[error("Multiple 'absolute-ordering' elements found in {uri}. Only one may be present")]
    MultipleAbsoluteOrdering { uri: String },

    /// More than one `<others>` marker in an absolute ordering.
    #[error("Multiple 'others' elements found in the 'absolute-ordering' of {uri}")]
    DuplicateOthers { uri: String },

    /// The implicit ordering directives contain a cycle.
    #[error("Circular ordering dependencies detected between documents: {cycle}")]
    OrderingCycle { cycle: String },

    /// A document names `others` in both its `before` and `after` lists.
    #[error("Document '{document}' declares 'others' in both 'before' and 'after'")]
    ConflictingOthers { document: String },

    /// A required element of a descriptor record is missing or blank.
    #[error("Missing required '{field}' in <{element}> at {location}")]
    MissingField {
        element: String,
        field: String,
        location: String,
    },

    /// A record declares contents that exclude each other.
    #[error("Conflicting entries in <{element}> '{key}' at {location}: {message}")]
    ConflictingEntries {
        element: String,
        key: String,
        message: String,
        location: String,
    },

    /// The loader settings file is invalid.
    #[error("Settings error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Settings {
        message: String,
        /// Optional hint for how to fix the settings
        hint: Option<String>,
    },

    /// An error indicating that a lock has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
