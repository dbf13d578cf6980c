//! Lookup and parsing benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`
//!
//! The table is synthesized by repeating the bundled `all_f.js` fixture
//! with suffixed keys, so no external documentation tree is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docsearch::index::{parse_search_data, RawEntry, SearchIndexTable};
use docsearch::query::{LookupOptions, MatchMode};

const FIXTURE: &str = include_str!("../tests/fixtures/search/all_f.js");

/// Repeat the fixture entries `copies` times with distinct keys
fn synthetic_entries(copies: usize) -> Vec<RawEntry> {
    let base = parse_search_data(FIXTURE).expect("fixture parses");
    (0..copies)
        .flat_map(|i| {
            base.iter().map(move |e| RawEntry {
                key: format!("{}{}", e.key, i),
                records: e.records.clone(),
            })
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_all_f", |b| {
        b.iter(|| parse_search_data(black_box(FIXTURE)).unwrap())
    });
}

fn bench_build(c: &mut Criterion) {
    let entries = synthetic_entries(1000);
    c.bench_function("build_19k_entries", |b| {
        b.iter(|| SearchIndexTable::build(black_box(entries.clone())).unwrap())
    });
}

fn bench_lookup(c: &mut Criterion) {
    let table = SearchIndexTable::build(synthetic_entries(1000)).unwrap();

    let mut group = c.benchmark_group("lookup");
    // Typical keystroke sequence in the search box
    for prefix in ["w", "wo", "wolkb", "withfirmwareupdate99"] {
        group.bench_function(format!("prefix_{}", prefix), |b| {
            b.iter(|| table.lookup(black_box(prefix)).len())
        });
    }

    let substring = LookupOptions::new(MatchMode::Substring);
    group.bench_function("substring_builder", |b| {
        b.iter(|| table.lookup_with(black_box("builder"), &substring).len())
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_build, bench_lookup);
criterion_main!(benches);
