//! # docsearch - Documentation Search Index
//!
//! docsearch loads the search index that documentation generators emit
//! (`search/all_*.js` files holding `var searchData=[...]`) and answers
//! search-as-you-type queries against it.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Search data parsing, table construction, snapshots, statistics
//! - [`query`] - Key encoding and prefix/substring lookup
//! - [`output`] - Result formatting (colored text and JSON)
//! - `tui` - Interactive search box (feature `interactive`)
//! - [`utils`] - Configuration, logging, HTML entity decoding
//!
//! ## Quick Start
//!
//! ```
//! use docsearch::index::{parse_search_data, SearchIndexTable};
//!
//! let raw = parse_search_data(
//!     "var searchData=[['withpersistence',['withPersistence',['../b.html#a1',1,'wolkabout::WolkBuilder']]]];",
//! ).unwrap();
//! let table = SearchIndexTable::build(raw).unwrap();
//!
//! for entry in table.lookup("WithP") {
//!     for record in &entry.records {
//!         println!("{} -> {}", record.label, record.anchor_path);
//!     }
//! }
//! ```
//!
//! Tables are immutable. When documentation is regenerated, build a new
//! table and swap it in through [`index::SharedIndex`].

pub mod index;
pub mod output;
pub mod query;
#[cfg(feature = "interactive")]
pub mod tui;
pub mod utils;
