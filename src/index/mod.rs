//! Search index tables and the search data they are built from.
//!
//! - [`types`] - Records and entries
//! - [`build`] - Validated, immutable [`SearchIndexTable`]
//! - [`searchdata`] - Parser for generated `searchData` literals
//! - [`reader`] - Loading files and directories
//! - [`shared`] - Atomically replaceable table handle
//! - [`stats`] - Table statistics

pub mod build;
pub mod error;
pub mod reader;
pub mod searchdata;
pub mod shared;
pub mod stats;
pub mod types;

pub use build::SearchIndexTable;
pub use error::{MalformedIndexError, SearchDataError};
pub use reader::open_table;
pub use searchdata::{parse_json, parse_search_data};
pub use shared::SharedIndex;
pub use stats::IndexStats;
pub use types::*;
