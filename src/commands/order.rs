//! Order command implementation
//!
//! Runs discovery, parsing and ordering (Phases 1-4) and prints the final
//! document order together with the application descriptor summary.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use faces_config::descriptor::DescriptorSummary;
use faces_config::output::{emoji, OutputConfig};
use faces_config::phases::OrderedDocuments;

use super::{load_error, LoadArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the order command
#[derive(Args, Debug)]
pub struct OrderArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OrderFormat::Text)]
    pub format: OrderFormat,
}

#[derive(Serialize)]
struct OrderReport<'a> {
    documents: Vec<DocumentEntry>,
    summary: &'a DescriptorSummary,
}

#[derive(Serialize)]
struct DocumentEntry {
    name: String,
    source: String,
}

fn report(ordered: &OrderedDocuments) -> OrderReport<'_> {
    OrderReport {
        documents: ordered
            .documents
            .iter()
            .map(|document| DocumentEntry {
                name: document.name(),
                source: document.system_id(),
            })
            .collect(),
        summary: &ordered.summary,
    }
}

/// Execute the order command
pub fn execute(args: OrderArgs, output: &OutputConfig) -> Result<()> {
    let settings = args.load.settings()?;
    let ordered = settings
        .documents()
        .and_then(|documents| documents.discover_and_order())
        .map_err(load_error)?;

    match args.format {
        OrderFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report(&ordered))?);
        }
        OrderFormat::Text => print_text(&ordered, output),
    }
    Ok(())
}

fn print_text(ordered: &OrderedDocuments, output: &OutputConfig) {
    println!(
        "{} {}",
        emoji(output, "🔍", "[ORDER]"),
        output.heading(&format!("Document order ({} documents)", ordered.len()))
    );

    let last = ordered.len().saturating_sub(1);
    for (index, document) in ordered.documents.iter().enumerate() {
        let name = document.name();
        let system_id = document.system_id();
        let is_app_descriptor = index == last && ordered.summary.is_application_descriptor;
        let label = if is_app_descriptor {
            output.anchor(&name)
        } else {
            name.clone()
        };
        if name == system_id {
            println!("  {:>3}. {}", index + 1, label);
        } else {
            println!("  {:>3}. {} {}", index + 1, label, output.detail(&system_id));
        }
    }

    let summary = &ordered.summary;
    println!();
    println!(
        "Version: {}  metadata-complete: {}",
        summary.version, summary.metadata_complete
    );
    match &summary.absolute_ordering {
        Some(names) => println!("Absolute ordering: {}", names.join(", ")),
        None => println!("Absolute ordering: none"),
    }
}
