use serde::{Deserialize, Serialize};

/// Position of an entry in the table (insertion order)
pub type EntryId = usize;

/// A single documentation location for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// Symbol name as displayed in search results
    pub label: String,
    /// Relative page path plus fragment, e.g. `../classfoo.html#a1b2`
    pub anchor_path: String,
    /// Enclosing namespace, class or file. Empty for top-level pages.
    #[serde(default)]
    pub scope_label: String,
}

impl DocRecord {
    pub fn new(
        label: impl Into<String>,
        anchor_path: impl Into<String>,
        scope_label: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            anchor_path: anchor_path.into(),
            scope_label: scope_label.into(),
        }
    }

    /// Page part of the anchor (everything before `#`)
    pub fn page(&self) -> &str {
        match memchr::memchr(b'#', self.anchor_path.as_bytes()) {
            Some(pos) => &self.anchor_path[..pos],
            None => &self.anchor_path,
        }
    }

    /// Fragment part of the anchor, without the `#`
    pub fn fragment(&self) -> Option<&str> {
        memchr::memchr(b'#', self.anchor_path.as_bytes()).map(|pos| &self.anchor_path[pos + 1..])
    }
}

/// Entry as read from search data, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub key: String,
    #[serde(default)]
    pub records: Vec<DocRecord>,
}

impl RawEntry {
    pub fn new(key: impl Into<String>, records: Vec<DocRecord>) -> Self {
        Self {
            key: key.into(),
            records,
        }
    }
}

/// Validated entry held by a [`SearchIndexTable`](crate::index::SearchIndexTable).
///
/// The key is lowercase and non-empty; `records` holds at least one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub key: String,
    pub records: Vec<DocRecord>,
}
