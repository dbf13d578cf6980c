//! Query normalization and table lookup.
//!
//! - [`codec`] - Key encoding used by generated search data
//! - [`lookup`] - Prefix and substring lookup over a [`SearchIndexTable`](crate::index::SearchIndexTable)

pub mod codec;
pub mod lookup;

pub use codec::{decode_key, encode_key};
pub use lookup::{LookupOptions, MatchMode};
