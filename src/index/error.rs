//! Error types for building and reading search indexes.

use thiserror::Error;

/// A raw entry failed validation while building a table.
///
/// Construction is all-or-nothing: no table is returned alongside this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedIndexError {
    /// Entry has an empty key.
    #[error("malformed index: entry {position} has an empty key")]
    EmptyKey { position: usize },

    /// Entry has no documentation records.
    #[error("malformed index: entry {position} ('{key}') has no records")]
    EmptyRecords { position: usize, key: String },
}

/// Search data could not be parsed into raw entries.
#[derive(Error, Debug)]
pub enum SearchDataError {
    /// Input ended inside a value.
    #[error("unexpected end of search data")]
    UnexpectedEof,

    /// Character that cannot start or continue a value.
    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedChar { found: char, offset: usize },

    /// Backslash escape that is not understood.
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape { offset: usize },

    /// Arrays nested deeper than any entry layout allows.
    #[error("arrays nested too deeply at byte {offset}")]
    TooDeep { offset: usize },

    /// Value parsed but does not have the entry layout.
    #[error("entry {position}: {reason}")]
    Shape { position: usize, reason: String },

    /// JSON form could not be decoded.
    #[error("invalid JSON search data: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchDataError {
    pub(crate) fn shape(position: usize, reason: impl Into<String>) -> Self {
        Self::Shape {
            position,
            reason: reason.into(),
        }
    }
}
