//! Lookup behavior against a real generated search index.
//!
//! `fixtures/search/all_f.js` is the `f` page of a Doxygen search index for a
//! C++ IoT client library.

use docsearch::index::reader::{load_dir, open_table};
use docsearch::index::{IndexStats, MalformedIndexError, RawEntry, SearchIndexTable, SharedIndex};
use docsearch::query::{decode_key, LookupOptions, MatchMode};
use std::path::PathBuf;
use std::sync::OnceLock;

static TABLE: OnceLock<SearchIndexTable> = OnceLock::new();

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("search")
}

fn table() -> &'static SearchIndexTable {
    TABLE.get_or_init(|| open_table(&fixture_dir(), "all_*.js").expect("Failed to load fixture"))
}

fn labels(table: &SearchIndexTable, prefix: &str) -> Vec<String> {
    table
        .records(prefix)
        .into_iter()
        .map(|r| r.label.clone())
        .collect()
}

#[test]
fn test_fixture_shape() {
    let table = table();
    assert_eq!(table.len(), 19);
    assert_eq!(table.key_count(), 17);
    assert_eq!(table.record_count(), 22);
}

#[test]
fn test_every_entry_found_by_its_key() {
    let table = table();
    for entry in table.iter() {
        let found = table.lookup(&entry.key);
        assert!(
            found.iter().any(|e| std::ptr::eq(*e, entry)),
            "lookup({}) missed its own entry",
            entry.key
        );

        // Display form of the key works too
        let found = table.lookup(&decode_key(&entry.key));
        assert!(found.iter().any(|e| e.records == entry.records));
    }
}

#[test]
fn test_prefix_soundness() {
    let table = table();
    for prefix in ["", "w", "wi", "with", "wolk", "wolkb", "wolk_5f", "wolkbuilder_2e"] {
        let found = table.lookup(prefix);
        for entry in table.iter().filter(|e| e.key.starts_with(prefix)) {
            assert!(found.iter().any(|e| std::ptr::eq(*e, entry)), "{} missed {}", prefix, entry.key);
        }
    }
}

#[test]
fn test_empty_prefix_lists_whole_table() {
    let table = table();
    let all = table.lookup("");
    assert_eq!(all.len(), table.len());
    assert_eq!(all[0].key, "withdataprotocol");
    assert_eq!(all[18].key, "wolkconnect_2dfunctional_2ddocumentation_2emd");
}

#[test]
fn test_withf_returns_three_records_in_order() {
    let table = table();
    let records = table.records("withf");
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].scope_label,
        "wolkabout::WolkBuilder::withFileManagement(const std::string &fileDownloadDirectory, std::uint64_t maxPacketSize)"
    );
    assert_eq!(
        records[1].scope_label,
        "wolkabout::WolkBuilder::withFileManagement(const std::string &fileDownloadDirectory, std::uint64_t maxPacketSize, std::shared_ptr< UrlFileDownloader > urlDownloader)"
    );
    assert_eq!(records[2].label, "withFirmwareUpdate");
    assert_eq!(
        records[2].anchor_path,
        "../classwolkabout_1_1_wolk_builder.html#af7c3818248400d6e7f6bc2ecd7503c91"
    );
}

#[test]
fn test_shared_key_keeps_insertion_order() {
    let table = table();
    let wolk = table.entries_for_key("wolk");
    assert_eq!(wolk.len(), 2);
    assert_eq!(wolk[0].records[0].anchor_path, "../classwolkabout_1_1_wolk.html");
    assert_eq!(wolk[0].records[0].scope_label, "wolkabout");
    assert_eq!(wolk[1].records[0].scope_label, "wolkabout::Wolk");

    let builder = table.entries_for_key("wolkbuilder");
    assert_eq!(builder.len(), 2);
    assert_eq!(builder[0].records.len(), 3);
    assert_eq!(
        builder[0].records[1].scope_label,
        "wolkabout::WolkBuilder::WolkBuilder(WolkBuilder &&)"
    );
    assert_eq!(builder[1].records[0].anchor_path, "../classwolkabout_1_1_wolk_builder.html");
}

#[test]
fn test_display_text_queries() {
    let table = table();
    assert_eq!(labels(table, "Wolk.h"), vec!["Wolk.h"]);
    assert_eq!(
        labels(table, "WOLK_CONNECT"),
        vec![
            "WOLK_CONNECT_VERSION_MAJOR",
            "WOLK_CONNECT_VERSION_MINOR",
            "WOLK_CONNECT_VERSION_PATCH",
        ]
    );
    assert_eq!(
        labels(table, "WolkConnect-"),
        vec!["WolkConnect-Functional-Documentation.md"]
    );
    assert_eq!(labels(table, "WolkBuilder.").len(), 2);
}

#[test]
fn test_lookup_miss() {
    let table = table();
    assert!(table.lookup("mqtt").is_empty());
    assert!(table.lookup("withz").is_empty());
}

#[test]
fn test_lookup_is_idempotent() {
    let table = table();
    let first: Vec<_> = table.lookup("wolk").iter().map(|e| e.key.clone()).collect();
    for _ in 0..3 {
        let again: Vec<_> = table.lookup("wolk").iter().map(|e| e.key.clone()).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn test_substring_and_limit() {
    let table = table();
    let options = LookupOptions::new(MatchMode::Substring);
    let found = table.lookup_with("version", &options);
    assert_eq!(found.len(), 3);

    let found = table.lookup_with("keepalive", &options);
    assert_eq!(found[0].records[0].label, "withoutKeepAlive");

    let limited = table.lookup_with("wolk", &LookupOptions::default().with_limit(3));
    let keys: Vec<_> = limited.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["wolk", "wolk", "wolk_2ecpp"]);
}

#[test]
fn test_stats() {
    let stats = IndexStats::collect(table());
    assert_eq!(stats.entries, 19);
    assert_eq!(stats.keys, 17);
    assert_eq!(stats.records, 22);
    // withfilemanagement, wolk, wolkbuilder
    assert_eq!(stats.overloaded_keys, 3);
    assert_eq!(stats.pages[0].0, "../classwolkabout_1_1_wolk_builder.html");
}

#[test]
fn test_build_rejects_malformed_entries() {
    let mut raw = load_dir(&fixture_dir(), "all_*.js").unwrap();
    raw.push(RawEntry::new("orphan", Vec::new()));

    let err = SearchIndexTable::build(raw).unwrap_err();
    assert_eq!(
        err,
        MalformedIndexError::EmptyRecords {
            position: 19,
            key: "orphan".to_string(),
        }
    );
}

#[test]
fn test_shared_index_swap() {
    let raw = load_dir(&fixture_dir(), "all_*.js").unwrap();
    let shared = SharedIndex::new(SearchIndexTable::build(raw.clone()).unwrap());
    let before = shared.snapshot();

    let regenerated: Vec<RawEntry> = raw.into_iter().filter(|e| e.key.starts_with("with")).collect();
    shared.replace(SearchIndexTable::build(regenerated).unwrap());

    assert_eq!(before.len(), 19);
    assert_eq!(shared.snapshot().len(), 5);
    assert!(shared.snapshot().lookup("wolk").is_empty());
    assert_eq!(before.lookup("wolk").len(), 14);
}
