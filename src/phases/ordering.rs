//! Phase 4: Determining Document Order
//!
//! This phase decides the order in which descriptor documents are merged.
//! Later documents override earlier ones, so the order is part of the
//! configuration's meaning.
//!
//! ## Anchors
//!
//! Two documents never move. The implementation-default descriptor, when
//! present, stays at index 0. The application descriptor
//! (`WEB-INF/faces-config.xml`), when present, is always last. Only the
//! documents between them are sorted.
//!
//! ## Process
//!
//! The application descriptor is summarised first. What happens next
//! depends on whether it declares an `<absolute-ordering>`:
//!
//! 1.  **Implicit ordering** (no absolute ordering): each document may carry
//!     an `<ordering>` element with `<before>` and `<after>` lists naming
//!     other documents or `others`. The documents are topologically sorted
//!     under those constraints. A document placing itself before `others`
//!     precedes every document it has no explicit relation with, and
//!     symmetrically for `after`. Unconstrained documents keep their
//!     discovery order. Cycles are fatal.
//!
//! 2.  **Absolute ordering**: listed names are placed in list order; every
//!     unlisted document fills the `others` slot, in discovery order. When
//!     the list has no `others`, unlisted documents are left out of the
//!     load and a warning is logged for each.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, warn};

use super::{CollectedDocuments, OrderedDocuments};
use crate::descriptor::{is_application_descriptor, DescriptorSummary};
use crate::document::{ConfigDocument, OTHERS};
use crate::error::{Error, Result};
use crate::suggestions;

/// `<before>`/`<after>` constraints declared by one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderingDirective {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

impl OrderingDirective {
    /// Reads the `<ordering>` element of a document, if it has one.
    pub fn from_document(document: &ConfigDocument) -> Option<Self> {
        let ordering = document.child_named(document.root(), "ordering")?;
        let list = |local: &str| -> Vec<String> {
            let mut names = Vec::new();
            for element in document.children_named(ordering, local) {
                for entry in document.child_elements(element) {
                    match document.local_name(entry) {
                        "name" => {
                            let name = document.text(entry);
                            if !name.is_empty() {
                                names.push(name);
                            }
                        }
                        "others" => names.push(OTHERS.to_string()),
                        _ => {}
                    }
                }
            }
            names
        };
        Some(Self {
            before: list("before"),
            after: list("after"),
        })
    }

    pub fn before_others(&self) -> bool {
        self.before.iter().any(|name| name == OTHERS)
    }

    pub fn after_others(&self) -> bool {
        self.after.iter().any(|name| name == OTHERS)
    }

    fn names_before(&self, name: &str) -> bool {
        name != OTHERS && self.before.iter().any(|n| n == name)
    }

    fn names_after(&self, name: &str) -> bool {
        name != OTHERS && self.after.iter().any(|n| n == name)
    }
}

/// The ordering-relevant view of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingEntry {
    pub name: String,
    pub directive: Option<OrderingDirective>,
}

impl OrderingEntry {
    pub fn new(name: impl Into<String>, directive: Option<OrderingDirective>) -> Self {
        Self {
            name: name.into(),
            directive,
        }
    }

    pub fn from_document(document: &ConfigDocument) -> Self {
        Self::new(document.name(), OrderingDirective::from_document(document))
    }

    fn rank(&self) -> u8 {
        match &self.directive {
            Some(d) if d.before_others() => 0,
            Some(d) if d.after_others() => 2,
            _ => 1,
        }
    }
}

/// Executes Phase 4: summarise the application descriptor and order the
/// collected documents around the anchors.
pub fn execute(
    collected: CollectedDocuments,
    application_descriptor: &str,
) -> Result<OrderedDocuments> {
    let CollectedDocuments {
        documents,
        has_default,
    } = collected;

    let mut documents = documents.into_iter();
    let head = if has_default { documents.next() } else { None };
    let mut middle: Vec<ConfigDocument> = documents.collect();

    let tail = middle
        .iter()
        .rposition(|doc| is_application_descriptor(doc, application_descriptor))
        .map(|index| middle.remove(index));

    let summary = DescriptorSummary::from_document(tail.as_ref(), application_descriptor)?;

    let entries: Vec<OrderingEntry> = middle.iter().map(OrderingEntry::from_document).collect();
    let order = match &summary.absolute_ordering {
        Some(absolute) => {
            debug!("Applying absolute ordering {:?}", absolute);
            sort_absolute(&entries, absolute)
        }
        None => sort_implicit(&entries)?,
    };

    let mut sorted = Vec::with_capacity(order.len() + 2);
    sorted.extend(head);
    sorted.extend(take_in_order(middle, &order));
    sorted.extend(tail);

    Ok(OrderedDocuments {
        documents: sorted,
        summary,
    })
}

/// Moves the documents at `order`'s indices out of `documents`.
fn take_in_order(documents: Vec<ConfigDocument>, order: &[usize]) -> Vec<ConfigDocument> {
    let mut slots: Vec<Option<ConfigDocument>> = documents.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
        .collect()
}

/// Sorts entries by their `<ordering>` directives.
///
/// Returns a permutation of the entry indices. Among entries with no
/// constraint between them the lowest index comes first, which keeps the
/// sort stable.
pub fn sort_implicit(entries: &[OrderingEntry]) -> Result<Vec<usize>> {
    for entry in entries {
        if let Some(directive) = &entry.directive {
            if directive.before_others() && directive.after_others() {
                return Err(Error::ConflictingOthers {
                    document: entry.name.clone(),
                });
            }
        }
    }

    let count = entries.len();
    let mut explicit = HashSet::new();
    for (i, first) in entries.iter().enumerate() {
        for (j, second) in entries.iter().enumerate() {
            if i == j {
                continue;
            }
            let first_says = first
                .directive
                .as_ref()
                .is_some_and(|d| d.names_before(&second.name));
            let second_says = second
                .directive
                .as_ref()
                .is_some_and(|d| d.names_after(&first.name));
            if first_says || second_says {
                explicit.insert((i, j));
            }
        }
    }

    let mut successors = vec![Vec::new(); count];
    let mut in_degree = vec![0usize; count];
    let mut add_edge = |from: usize, to: usize| {
        successors[from].push(to);
        in_degree[to] += 1;
    };
    for &(from, to) in &explicit {
        add_edge(from, to);
    }
    for i in 0..count {
        for j in 0..count {
            let related = explicit.contains(&(i, j)) || explicit.contains(&(j, i));
            if i != j && !related && entries[i].rank() < entries[j].rank() {
                add_edge(i, j);
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<usize>> = (0..count)
        .filter(|&i| in_degree[i] == 0)
        .map(Reverse)
        .collect();
    let mut order = Vec::with_capacity(count);
    while let Some(Reverse(next)) = ready.pop() {
        order.push(next);
        for &successor in &successors[next] {
            in_degree[successor] -= 1;
            if in_degree[successor] == 0 {
                ready.push(Reverse(successor));
            }
        }
    }

    if order.len() < count {
        let remaining: Vec<bool> = in_degree.iter().map(|&degree| degree > 0).collect();
        let cycle: Vec<&str> = (0..count)
            .filter(|&i| remaining[i] && reaches_itself(&successors, &remaining, i))
            .map(|i| entries[i].name.as_str())
            .collect();
        return Err(Error::OrderingCycle {
            cycle: cycle.join(", "),
        });
    }

    Ok(order)
}

/// Whether `start` lies on a cycle among the `remaining` entries.
///
/// Entries left over after the sort either sit on a cycle or only follow
/// one; the latter are not part of the cycle.
fn reaches_itself(successors: &[Vec<usize>], remaining: &[bool], start: usize) -> bool {
    let mut visited = vec![false; successors.len()];
    let mut pending: Vec<usize> = successors[start].clone();
    while let Some(next) = pending.pop() {
        if next == start {
            return true;
        }
        if !remaining[next] || visited[next] {
            continue;
        }
        visited[next] = true;
        pending.extend(successors[next].iter().copied());
    }
    false
}

/// Orders entries by an absolute name list.
///
/// Returns the indices of the entries to keep, in order. Each listed name
/// takes the first not-yet-placed entry of that name.
pub fn sort_absolute(entries: &[OrderingEntry], absolute: &[String]) -> Vec<usize> {
    let mut placed = vec![false; entries.len()];
    let mut before_others = Vec::new();
    let mut after_others = Vec::new();
    let mut others_seen = false;

    for name in absolute {
        if name == OTHERS {
            others_seen = true;
            continue;
        }
        let found = entries
            .iter()
            .enumerate()
            .position(|(i, entry)| !placed[i] && entry.name == *name);
        match found {
            Some(index) => {
                placed[index] = true;
                if others_seen {
                    after_others.push(index);
                } else {
                    before_others.push(index);
                }
            }
            None => {
                let known: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
                let hint = suggestions::find_similar(name, &known)
                    .map(|similar| format!(" (did you mean '{}'?)", similar))
                    .unwrap_or_default();
                warn!(
                    "No document named '{}' found for the absolute ordering{}",
                    name, hint
                );
            }
        }
    }

    let unlisted: Vec<usize> = (0..entries.len()).filter(|&i| !placed[i]).collect();
    let mut order = before_others;
    if others_seen {
        order.extend(unlisted);
    } else {
        for &index in &unlisted {
            warn!(
                "Document '{}' is not named in the absolute ordering and will not be loaded",
                entries[index].name
            );
        }
    }
    order.extend(after_others);
    order
}
