//! # Faces Config Library
//!
//! This library discovers `faces-config.xml` descriptor documents, puts them
//! in the order the ordering rules demand, and merges them into one typed
//! configuration model. It is used by the `faces-config` command-line tool
//! but is meant to be embedded by anything that boots from descriptors.
//!
//! ## Quick Example
//!
//! ```
//! use faces_config::document::ConfigDocument;
//! use faces_config::phases::{phase4, CollectedDocuments};
//!
//! let texts = [
//!     "<faces-config><name>b</name><ordering><after><name>a</name></after></ordering></faces-config>",
//!     "<faces-config><name>a</name></faces-config>",
//! ];
//! let documents = texts
//!     .iter()
//!     .map(|text| ConfigDocument::parse(text, None))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let ordered = phase4::execute(
//!     CollectedDocuments { documents, has_default: false },
//!     "WEB-INF/faces-config.xml",
//! )
//! .unwrap();
//! assert_eq!(ordered.names(), vec!["a", "b"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Documents (`document`)**: A parsed descriptor plus the URL it came
//!   from. Its logical name, used for ordering, is its `<name>` element or
//!   its URL.
//! - **Providers (`provider`, `parser`)**: Where documents come from. A
//!   `ResourceProvider` lists URLs, a `DocumentParser` reads them and a
//!   `Populator` builds a document in code.
//! - **Phases (`phases`)**: The load pipeline, from discovery to the merged
//!   model.
//! - **Rules (`rules`)**: The element handlers that build and merge the
//!   typed model.
//! - **Registry (`registry`)**: Loaded configurations kept per tenant.
//!
//! ## Execution Flow
//!
//! The main entry point is [`load`], or `phases::orchestrator::Documents`
//! for full control. A load executes:
//!
//! 1.  **Discovery**: Ask every provider for its descriptor URLs.
//! 2.  **Parsing**: Parse every unique URL, in parallel when configured.
//! 3.  **Population**: Build the programmatic documents and splice them in.
//! 4.  **Ordering**: Sort the documents between the implementation default
//!     and the application descriptor.
//! 5.  **Assembly**: Merge the ordered documents into a `FacesConfig`.
//!
//! Loading is all-or-nothing: any failure aborts the load with an
//! [`error::Error`].

pub mod config;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod executor;
pub mod output;
pub mod parser;
pub mod phases;
pub mod provider;
pub mod registry;
pub mod rules;
pub mod suggestions;

#[cfg(test)]
mod ordering_proptest;

use config::Settings;
use error::Result;
use phases::orchestrator::LoadedConfig;

/// Loads and merges every descriptor the settings point at.
pub fn load(settings: &Settings) -> Result<LoadedConfig> {
    settings.documents()?.load()
}
