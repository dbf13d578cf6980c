use crate::index::error::MalformedIndexError;
use crate::index::types::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Key dictionary: entry ids sorted by key.
///
/// Sorting is stable, so ids sharing a key stay in insertion order.
pub(crate) struct KeyDict {
    order: Vec<EntryId>,
}

impl KeyDict {
    fn new(entries: &[IndexEntry]) -> Self {
        let mut order: Vec<EntryId> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| entries[a].key.cmp(&entries[b].key));
        Self { order }
    }

    /// Ids of all entries whose key starts with `prefix`, in key order
    pub(crate) fn prefix_range<'a>(&'a self, entries: &[IndexEntry], prefix: &str) -> &'a [EntryId] {
        let start = self
            .order
            .partition_point(|&id| entries[id].key.as_str() < prefix);
        let len = self.order[start..].partition_point(|&id| entries[id].key.starts_with(prefix));
        &self.order[start..start + len]
    }
}

/// Immutable documentation search table.
///
/// Built once from raw entries, then queried through
/// [`lookup`](SearchIndexTable::lookup) and friends. There is no way to
/// mutate a table after construction; regenerated data produces a new table.
pub struct SearchIndexTable {
    pub(crate) entries: Vec<IndexEntry>,
    pub(crate) key_dict: KeyDict,
    pub(crate) key_map: FxHashMap<String, Vec<EntryId>>,
}

impl SearchIndexTable {
    /// Validate raw entries and build a table.
    ///
    /// Fails on the first entry with an empty key or no records. Keys are
    /// lowercased; records are kept in the order given.
    pub fn build(
        raw_entries: impl IntoIterator<Item = RawEntry>,
    ) -> Result<Self, MalformedIndexError> {
        let raw_entries = raw_entries.into_iter();
        let mut entries = Vec::with_capacity(raw_entries.size_hint().0);

        for (position, raw) in raw_entries.enumerate() {
            if raw.key.is_empty() {
                return Err(MalformedIndexError::EmptyKey { position });
            }
            if raw.records.is_empty() {
                return Err(MalformedIndexError::EmptyRecords {
                    position,
                    key: raw.key,
                });
            }
            entries.push(IndexEntry {
                key: raw.key.to_lowercase(),
                records: raw.records,
            });
        }

        let key_dict = KeyDict::new(&entries);
        let mut key_map: FxHashMap<String, Vec<EntryId>> = FxHashMap::default();
        for (id, entry) in entries.iter().enumerate() {
            key_map.entry(entry.key.clone()).or_default().push(id);
        }

        debug!(
            entries = entries.len(),
            keys = key_map.len(),
            "built search index table"
        );

        Ok(Self {
            entries,
            key_dict,
            key_map,
        })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct keys
    pub fn key_count(&self) -> usize {
        self.key_map.len()
    }

    /// Total number of records across all entries
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|e| e.records.len()).sum()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: EntryId) -> Option<&IndexEntry> {
        self.entries.get(id)
    }
}

impl std::fmt::Debug for SearchIndexTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndexTable")
            .field("entries", &self.entries.len())
            .field("keys", &self.key_map.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a SearchIndexTable {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(key: &str, labels: &[&str]) -> RawEntry {
        RawEntry::new(
            key,
            labels
                .iter()
                .map(|l| DocRecord::new(*l, format!("../{}.html", l), "scope"))
                .collect(),
        )
    }

    #[test]
    fn test_build_counts() {
        let table = SearchIndexTable::build(vec![
            raw("wolk", &["Wolk"]),
            raw("wolk", &["Wolk"]),
            raw("wolkbuilder", &["WolkBuilder", "WolkBuilder", "WolkBuilder"]),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.key_count(), 2);
        assert_eq!(table.record_count(), 5);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_build_rejects_empty_key() {
        let err = SearchIndexTable::build(vec![raw("wolk", &["Wolk"]), raw("", &["X"])]).unwrap_err();
        assert_eq!(err, MalformedIndexError::EmptyKey { position: 1 });
    }

    #[test]
    fn test_build_rejects_empty_records() {
        let err = SearchIndexTable::build(vec![raw("withpersistence", &[])]).unwrap_err();
        assert_eq!(
            err,
            MalformedIndexError::EmptyRecords {
                position: 0,
                key: "withpersistence".to_string(),
            }
        );
        assert!(err.to_string().contains("withpersistence"));
    }

    #[test]
    fn test_build_empty_input() {
        let table = SearchIndexTable::build(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.key_count(), 0);
    }

    #[test]
    fn test_build_lowercases_keys() {
        let table = SearchIndexTable::build(vec![raw("WithDataProtocol", &["withDataProtocol"])]).unwrap();
        assert_eq!(table.get(0).unwrap().key, "withdataprotocol");
    }

    #[test]
    fn test_key_dict_prefix_range() {
        let table = SearchIndexTable::build(vec![
            raw("wolkbuilder", &["a"]),
            raw("withpersistence", &["b"]),
            raw("wolk", &["c"]),
            raw("wolk", &["d"]),
            raw("zzz", &["e"]),
        ])
        .unwrap();

        let ids = table.key_dict.prefix_range(&table.entries, "wolk");
        assert_eq!(ids, &[2, 3, 0]);

        let ids = table.key_dict.prefix_range(&table.entries, "x");
        assert!(ids.is_empty());

        let ids = table.key_dict.prefix_range(&table.entries, "");
        assert_eq!(ids.len(), 5);
    }
}
