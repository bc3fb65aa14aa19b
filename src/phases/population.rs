//! Phase 3: Population
//!
//! Programmatic configuration enters the load here. Every registered
//! `Populator` receives its own empty descriptor and fills it in.
//!
//! ## Process
//!
//! 1.  **Population**: Populators run on the calling thread in registration
//!     order. A failing populator aborts the load.
//!
//! 2.  **Splicing**: The first populated document is the
//!     implementation-default descriptor and goes in front of all discovered
//!     documents. The remaining populated documents follow the discovered
//!     ones.

use std::sync::Arc;

use log::debug;

use super::CollectedDocuments;
use crate::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::provider::Populator;

/// Executes Phase 3: run the populators and splice their documents around
/// the discovered ones.
pub fn execute(
    populators: &[Arc<dyn Populator>],
    discovered: Vec<ConfigDocument>,
) -> Result<CollectedDocuments> {
    let populated = populate(populators)?;
    Ok(splice(discovered, populated))
}

/// Runs every populator against a fresh descriptor.
pub fn populate(populators: &[Arc<dyn Populator>]) -> Result<Vec<ConfigDocument>> {
    populators
        .iter()
        .map(|populator| {
            debug!("Running populator {}", populator.name());
            let mut document = ConfigDocument::empty_descriptor()?;
            populator
                .populate(&mut document)
                .map_err(|e| match e {
                    Error::Populator { .. } => e,
                    other => Error::Populator {
                        populator: populator.name().to_string(),
                        message: other.to_string(),
                    },
                })?;
            Ok(document)
        })
        .collect()
}

/// Places the first populated document first and the rest last.
pub fn splice(discovered: Vec<ConfigDocument>, populated: Vec<ConfigDocument>) -> CollectedDocuments {
    let mut populated = populated.into_iter();
    let Some(default) = populated.next() else {
        return CollectedDocuments {
            documents: discovered,
            has_default: false,
        };
    };

    let mut documents = Vec::with_capacity(discovered.len() + populated.len() + 1);
    documents.push(default);
    documents.extend(discovered);
    documents.extend(populated);
    CollectedDocuments {
        documents,
        has_default: true,
    }
}
