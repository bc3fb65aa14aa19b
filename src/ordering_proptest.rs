//! Property-based tests for the ordering engine.
//!
//! These tests use proptest to generate random document sets and ordering
//! directives and verify that the sort invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::document::OTHERS;
    use crate::phases::ordering::{sort_absolute, sort_implicit, OrderingDirective, OrderingEntry};
    use proptest::prelude::*;

    fn name(index: usize) -> String {
        format!("doc-{}", index)
    }

    fn is_permutation(order: &[usize], count: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..count).collect::<Vec<_>>()
    }

    /// Entries where document `j` may declare `after` on any earlier
    /// document, which can never form a cycle.
    fn acyclic_entries() -> impl Strategy<Value = (Vec<OrderingEntry>, Vec<(usize, usize)>)> {
        (1usize..12).prop_flat_map(|count| {
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), count), count)
                .prop_map(move |matrix| {
                    let mut edges = Vec::new();
                    let entries: Vec<OrderingEntry> = (0..count)
                        .map(|j| {
                            let after: Vec<String> = (0..j)
                                .filter(|&i| matrix[j][i])
                                .map(|i| {
                                    edges.push((i, j));
                                    name(i)
                                })
                                .collect();
                            let directive = (!after.is_empty()).then(|| OrderingDirective {
                                before: Vec::new(),
                                after,
                            });
                            OrderingEntry::new(name(j), directive)
                        })
                        .collect();
                    (entries, edges)
                })
        })
    }

    // ============================================================================
    // sort_implicit property tests
    // ============================================================================

    proptest! {
        /// Property: without directives the discovery order is kept
        #[test]
        fn implicit_without_directives_is_identity(count in 0usize..20) {
            let entries: Vec<_> = (0..count).map(|i| OrderingEntry::new(name(i), None)).collect();
            let order = sort_implicit(&entries).unwrap();
            prop_assert_eq!(order, (0..count).collect::<Vec<_>>());
        }

        /// Property: every declared `after` relation holds in the result
        #[test]
        fn implicit_respects_after_relations((entries, edges) in acyclic_entries()) {
            let order = sort_implicit(&entries).unwrap();
            prop_assert!(is_permutation(&order, entries.len()));

            let mut position = vec![0; entries.len()];
            for (pos, &index) in order.iter().enumerate() {
                position[index] = pos;
            }
            for (earlier, later) in edges {
                prop_assert!(
                    position[earlier] < position[later],
                    "{} should precede {}",
                    name(earlier),
                    name(later)
                );
            }
        }

        /// Property: sorting is deterministic
        #[test]
        fn implicit_is_deterministic((entries, _) in acyclic_entries()) {
            prop_assert_eq!(sort_implicit(&entries).unwrap(), sort_implicit(&entries).unwrap());
        }

        /// Property: a `before others` document precedes every unrelated plain one
        #[test]
        fn implicit_before_others_goes_first(count in 1usize..10, chosen in 0usize..10) {
            let chosen = chosen % count;
            let entries: Vec<_> = (0..count)
                .map(|i| {
                    let directive = (i == chosen).then(|| OrderingDirective {
                        before: vec![OTHERS.to_string()],
                        after: Vec::new(),
                    });
                    OrderingEntry::new(name(i), directive)
                })
                .collect();
            let order = sort_implicit(&entries).unwrap();
            prop_assert_eq!(order[0], chosen);
        }
    }

    // ============================================================================
    // sort_absolute property tests
    // ============================================================================

    proptest! {
        /// Property: with `others`, every document is kept exactly once
        #[test]
        fn absolute_with_others_keeps_everything(
            count in 0usize..12,
            listed in proptest::collection::vec(0usize..12, 0..6),
            others_at in 0usize..7,
        ) {
            let entries: Vec<_> = (0..count).map(|i| OrderingEntry::new(name(i), None)).collect();
            let mut absolute: Vec<String> = listed.iter().map(|&i| name(i)).collect();
            absolute.insert(others_at.min(absolute.len()), OTHERS.to_string());

            let order = sort_absolute(&entries, &absolute);
            prop_assert!(is_permutation(&order, count));
        }

        /// Property: without `others`, only listed documents are kept
        #[test]
        fn absolute_without_others_keeps_only_listed(
            count in 0usize..12,
            listed in proptest::collection::vec(0usize..12, 0..6),
        ) {
            let entries: Vec<_> = (0..count).map(|i| OrderingEntry::new(name(i), None)).collect();
            let absolute: Vec<String> = listed.iter().map(|&i| name(i)).collect();

            let order = sort_absolute(&entries, &absolute);
            for &index in &order {
                prop_assert!(absolute.contains(&entries[index].name));
            }
            let mut unique = order.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), order.len());
        }
    }
}
