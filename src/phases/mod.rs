//! Implementation of the phases of a configuration load.
//!
//! ## Overview
//!
//! A load follows 5 phases:
//! 1. Discovery - Ask every resource provider for its descriptor URLs
//! 2. Parsing - Parse each unique URL into a document
//! 3. Population - Build the programmatic documents and splice them in
//! 4. Ordering - Summarise the application descriptor and sort the documents
//! 5. Assembly - Merge the ordered documents into one configuration model
//!
//! Phases 1 and 2 submit their tasks to an `Executor` and read the results
//! in submission order, so the outcome does not depend on whether a worker
//! pool is used. Phases 3-5 run on the calling thread.
//!
//! Each phase depends only on the previous phases and the foundation modules.

use crate::descriptor::DescriptorSummary;
use crate::document::ConfigDocument;

// Phase modules
pub mod assembly;
pub mod discovery;
pub mod orchestrator;
pub mod ordering;
pub mod parse;
pub mod population;

pub use discovery as phase1;
pub use parse as phase2;
pub use population as phase3;
pub use ordering as phase4;
pub use assembly as phase5;

/// Documents in their final processing order.
#[derive(Debug)]
pub struct OrderedDocuments {
    /// The ordered documents. The implementation-default descriptor, when
    /// present, is first; the application descriptor, when present, is last.
    pub documents: Vec<ConfigDocument>,
    /// Summary of the application descriptor.
    pub summary: DescriptorSummary,
}

impl OrderedDocuments {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Logical names of the documents, in order.
    pub fn names(&self) -> Vec<String> {
        self.documents.iter().map(ConfigDocument::name).collect()
    }
}

/// Documents collected before ordering, with the position of the
/// implementation-default descriptor recorded.
#[derive(Debug, Default)]
pub struct CollectedDocuments {
    /// Documents in collection order.
    pub documents: Vec<ConfigDocument>,
    /// Whether `documents[0]` is the implementation-default descriptor.
    pub has_default: bool,
}
