//! Benchmarks for document ordering.
//!
//! Covers the two sorts that run on every load: the implicit sort over
//! `<ordering>` directives and the absolute sort over a name list.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use faces_config::phases::ordering::{
    sort_absolute, sort_implicit, OrderingDirective, OrderingEntry,
};

/// Builds `count` entries resembling a large application: most libraries
/// declare nothing, some chain after their predecessor and a few ask to go
/// before or after everything else.
fn create_entries(count: usize) -> Vec<OrderingEntry> {
    (0..count)
        .map(|i| {
            let name = format!("lib{}", i);
            let directive = match i % 10 {
                0 if i > 0 => Some(OrderingDirective {
                    before: Vec::new(),
                    after: vec![format!("lib{}", i - 1)],
                }),
                3 => Some(OrderingDirective {
                    before: vec!["others".to_string()],
                    after: Vec::new(),
                }),
                7 => Some(OrderingDirective {
                    before: Vec::new(),
                    after: vec!["others".to_string()],
                }),
                _ => None,
            };
            OrderingEntry::new(name, directive)
        })
        .collect()
}

fn bench_sort_implicit(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_implicit");
    for count in [10, 50, 200] {
        let entries = create_entries(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| sort_implicit(black_box(entries)).unwrap())
        });
    }
    group.finish();
}

fn bench_sort_absolute(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_absolute");
    for count in [10, 50, 200] {
        let entries = create_entries(count);
        let mut absolute: Vec<String> = entries
            .iter()
            .step_by(3)
            .map(|entry| entry.name.clone())
            .collect();
        absolute.insert(absolute.len() / 2, "others".to_string());
        group.bench_with_input(BenchmarkId::from_parameter(count), &entries, |b, entries| {
            b.iter(|| sort_absolute(black_box(entries), black_box(&absolute)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort_implicit, bench_sort_absolute);
criterion_main!(benches);
