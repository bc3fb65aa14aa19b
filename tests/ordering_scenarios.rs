//! Ordering scenario tests using datatest-stable for test data discovery
//!
//! Each YAML file under `tests/testdata/ordering` describes a set of
//! documents with their `<ordering>` directives, an optional absolute
//! ordering, and the expected outcome: either the resulting name order or
//! the kind of error the sort must report.

use faces_config::error::Error;
use faces_config::phases::ordering::{
    sort_absolute, sort_implicit, OrderingDirective, OrderingEntry,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Scenario {
    documents: Vec<ScenarioDocument>,
    #[serde(default)]
    absolute: Option<Vec<String>>,
    expect: Expectation,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioDocument {
    name: String,
    #[serde(default)]
    before: Vec<String>,
    #[serde(default)]
    after: Vec<String>,
}

/// Exactly one of `order` or `error` is set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Expectation {
    #[serde(default)]
    order: Option<Vec<String>>,
    #[serde(default)]
    error: Option<ExpectedError>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
enum ExpectedError {
    Cycle,
    ConflictingOthers,
}

impl ScenarioDocument {
    fn entry(&self) -> OrderingEntry {
        let directive = if self.before.is_empty() && self.after.is_empty() {
            None
        } else {
            Some(OrderingDirective {
                before: self.before.clone(),
                after: self.after.clone(),
            })
        };
        OrderingEntry::new(self.name.clone(), directive)
    }
}

/// Sorts the documents of one scenario file and checks the outcome.
fn test_ordering_scenario(path: &Path) -> datatest_stable::Result<()> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
    let scenario: Scenario = serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse scenario {}: {}", path.display(), e))?;

    let entries: Vec<OrderingEntry> = scenario.documents.iter().map(ScenarioDocument::entry).collect();
    let result = match &scenario.absolute {
        Some(absolute) => Ok(sort_absolute(&entries, absolute)),
        None => sort_implicit(&entries),
    };

    let expect = scenario.expect;
    match (result, expect.order, expect.error) {
        (Ok(order), Some(expected), None) => {
            let names: Vec<&str> = order.iter().map(|&i| entries[i].name.as_str()).collect();
            assert_eq!(names, expected, "unexpected order in {}", path.display());
        }
        (Err(error), None, Some(expected)) => {
            let actual = match error {
                Error::OrderingCycle { .. } => ExpectedError::Cycle,
                Error::ConflictingOthers { .. } => ExpectedError::ConflictingOthers,
                other => return Err(format!("unexpected error in {}: {}", path.display(), other).into()),
            };
            assert_eq!(actual, expected, "wrong error kind in {}", path.display());
        }
        (Ok(order), None, Some(expected)) => {
            return Err(format!(
                "{} expected {:?} but sorted to {:?}",
                path.display(),
                expected,
                order
            )
            .into());
        }
        (Err(error), Some(_), None) => {
            return Err(format!("{} failed to sort: {}", path.display(), error).into());
        }
        _ => {
            return Err(format!(
                "{} must set exactly one of expect.order and expect.error",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

datatest_stable::harness!(test_ordering_scenario, "tests/testdata/ordering", r".*\.yaml$");
