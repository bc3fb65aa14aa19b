//! Phase 2: Parsing
//!
//! The second phase turns every URL found in Phase 1 into a parsed
//! `ConfigDocument`.
//!
//! ## Process
//!
//! 1.  **Submission**: One parse task per URL is submitted to the executor.
//!     Tasks share nothing but the parser, which is read-only.
//!
//! 2.  **Collection**: Results are awaited in URL order, so the document
//!     sequence matches the discovery order regardless of which task
//!     finishes first.
//!
//! 3.  **Fail-fast**: The first failed task aborts the load. Later results
//!     are dropped unread.

use std::sync::Arc;

use url::Url;

use crate::document::ConfigDocument;
use crate::error::Result;
use crate::executor::Executor;
use crate::parser::DocumentParser;

/// Executes Phase 2: parse every URL, preserving order.
pub fn execute(
    urls: &[Url],
    parser: &Arc<dyn DocumentParser>,
    executor: &Executor,
) -> Result<Vec<ConfigDocument>> {
    let handles: Vec<_> = urls
        .iter()
        .map(|url| {
            let parser = Arc::clone(parser);
            let url = url.clone();
            executor.submit(format!("parse {}", url), move || parser.parse(&url))
        })
        .collect();

    handles.into_iter().map(|handle| handle.wait()).collect()
}
