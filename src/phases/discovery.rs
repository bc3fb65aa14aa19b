//! Phase 1: Discovery
//!
//! This is the first phase of a configuration load. It asks every registered
//! resource provider for the descriptor URLs it contributes.
//!
//! ## Process
//!
//! 1.  **Submission**: One discovery task per provider is submitted to the
//!     executor, in provider registration order.
//!
//! 2.  **Collection**: The task results are awaited in the same order. The
//!     first failing task aborts the phase; a load never continues with a
//!     partial set of URLs.
//!
//! 3.  **Deduplication**: URLs are collected with set semantics. A URL
//!     returned by two providers is kept at its first position only.
//!
//! The resulting URL list is in a deterministic order: provider order first,
//! then the order each provider returned its URLs.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::provider::ResourceProvider;

/// Executes Phase 1: collect the unique descriptor URLs of all providers.
pub fn execute(providers: &[Arc<dyn ResourceProvider>], executor: &Executor) -> Result<Vec<Url>> {
    let handles: Vec<_> = providers
        .iter()
        .map(|provider| {
            let provider = Arc::clone(provider);
            let label = format!("discover {}", provider.name());
            executor.submit(label, move || {
                provider.resources().map_err(|e| match e {
                    Error::Discovery { .. } => e,
                    other => Error::Discovery {
                        provider: provider.name().to_string(),
                        message: other.to_string(),
                    },
                })
            })
        })
        .collect();

    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for handle in handles {
        let label = handle.label().to_string();
        let found = handle.wait()?;
        debug!("{} returned {} resource(s)", label, found.len());
        for url in found {
            if seen.insert(url.clone()) {
                urls.push(url);
            } else {
                debug!("Skipping duplicate resource {}", url);
            }
        }
    }

    Ok(urls)
}
