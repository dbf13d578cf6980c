//! Utility functions.
//!
//! - [`app_data`] - Configuration file handling
//! - [`entities`] - HTML character reference decoding
//! - [`logging`] - Tracing subscriber setup

pub mod app_data;
pub mod entities;
pub mod logging;

pub use app_data::*;
pub use entities::*;
pub use logging::*;
