use crate::index::types::{DocRecord, EntryId, IndexEntry};
use crate::index::SearchIndexTable;
use crate::query::codec::{decode_key, encode_key};
use memchr::memmem;
use serde::{Deserialize, Serialize};

/// How a query is compared with keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Key starts with the query
    #[default]
    Prefix,
    /// Key contains the query anywhere
    Substring,
}

/// Lookup options
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    pub mode: MatchMode,
    /// Maximum number of entries returned (`Some(0)` is unlimited)
    pub limit: Option<usize>,
}

impl LookupOptions {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode, limit: None }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl SearchIndexTable {
    /// Entries whose key starts with `prefix`, in insertion order.
    ///
    /// The prefix is case-insensitive and encoded like the keys; a prefix
    /// already in key form (`wolk_2eh`) matches too. An empty prefix returns
    /// every entry. A miss is an empty `Vec`.
    pub fn lookup(&self, prefix: &str) -> Vec<&IndexEntry> {
        self.lookup_with(prefix, &LookupOptions::default())
    }

    /// Lookup with an explicit match mode and limit
    pub fn lookup_with(&self, query: &str, options: &LookupOptions) -> Vec<&IndexEntry> {
        let needles = needles(query);

        let mut ids: Vec<EntryId> = match options.mode {
            MatchMode::Prefix => needles
                .iter()
                .flat_map(|needle| self.key_dict.prefix_range(&self.entries, needle))
                .copied()
                .collect(),
            MatchMode::Substring => {
                let finders: Vec<_> = needles
                    .iter()
                    .map(|needle| memmem::Finder::new(needle.as_bytes()))
                    .collect();
                self.entries
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| finders.iter().any(|f| f.find(e.key.as_bytes()).is_some()))
                    .map(|(id, _)| id)
                    .collect()
            }
        };

        // Key order -> insertion order
        ids.sort_unstable();
        ids.dedup();

        if let Some(limit) = options.limit.filter(|&limit| limit > 0) {
            ids.truncate(limit);
        }

        ids.into_iter().map(|id| &self.entries[id]).collect()
    }

    /// All entries with exactly this key, in insertion order
    pub fn entries_for_key(&self, key: &str) -> Vec<&IndexEntry> {
        self.key_map
            .get(key.to_lowercase().as_str())
            .map(|ids| ids.iter().map(|&id| &self.entries[id]).collect())
            .unwrap_or_default()
    }

    /// Records of every entry matching `prefix`, flattened in order
    pub fn records(&self, prefix: &str) -> Vec<&DocRecord> {
        self.lookup(prefix)
            .into_iter()
            .flat_map(|e| e.records.iter())
            .collect()
    }
}

/// Query forms compared against keys: the encoded display text, and the
/// query itself when it is already a well-formed key (so `wolk_2eh` finds
/// itself while `wolk_` still means a literal underscore)
fn needles(query: &str) -> Vec<String> {
    let encoded = encode_key(query);
    let raw = query.to_lowercase();

    if raw != encoded && encode_key(&decode_key(&raw)) == raw {
        vec![encoded, raw]
    } else {
        vec![encoded]
    }
}
