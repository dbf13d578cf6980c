use crate::index::build::SearchIndexTable;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::Path;

/// Summary of a table's contents
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub entries: usize,
    pub keys: usize,
    pub records: usize,
    /// Keys shared by several entries or carrying several records
    pub overloaded_keys: usize,
    /// Record counts per scope label, largest first
    pub scopes: Vec<(String, usize)>,
    /// Record counts per documentation page, largest first
    pub pages: Vec<(String, usize)>,
}

impl IndexStats {
    pub fn collect(table: &SearchIndexTable) -> Self {
        let mut records_per_key: FxHashMap<&str, usize> = FxHashMap::default();
        let mut scopes: FxHashMap<&str, usize> = FxHashMap::default();
        let mut pages: FxHashMap<&str, usize> = FxHashMap::default();

        for entry in table {
            *records_per_key.entry(entry.key.as_str()).or_insert(0) += entry.records.len();
            for record in &entry.records {
                *scopes.entry(record.scope_label.as_str()).or_insert(0) += 1;
                *pages.entry(record.page()).or_insert(0) += 1;
            }
        }

        Self {
            entries: table.len(),
            keys: table.key_count(),
            records: table.record_count(),
            overloaded_keys: records_per_key.values().filter(|&&n| n > 1).count(),
            scopes: sorted_counts(scopes),
            pages: sorted_counts(pages),
        }
    }
}

/// Sort by count descending, then name, for stable output
fn sorted_counts(counts: FxHashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Display index statistics
pub fn show_stats(table: &SearchIndexTable, source: &Path) {
    let stats = IndexStats::collect(table);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Source:           {}", source.display());
    println!("Entries:          {}", stats.entries);
    println!("Distinct keys:    {}", stats.keys);
    println!("Records:          {}", stats.records);
    println!("Overloaded keys:  {}", stats.overloaded_keys);

    print_counts("Records by scope:", &stats.scopes);
    print_counts("Records by page:", &stats.pages);
}

fn print_counts(title: &str, counts: &[(String, usize)]) {
    println!();
    println!("{}", title);

    for (name, count) in counts.iter().take(15) {
        let name = if name.is_empty() { "(global)" } else { name.as_str() };
        println!("  {:40} {}", name, count);
    }

    if counts.len() > 15 {
        println!("  ... and {} more", counts.len() - 15);
    }
}
