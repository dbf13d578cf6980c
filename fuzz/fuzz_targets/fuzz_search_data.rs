#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing arbitrary text must return an error, never panic
    if let Ok(raw) = docsearch::index::parse_search_data(data) {
        if let Ok(table) = docsearch::index::SearchIndexTable::build(raw) {
            let _ = table.lookup("");
        }
    }
});
