//! Trade Journal - personal trade log with an append-only CSV record store
//!
//! Trades are collected one record at a time, appended to a flat table that is
//! rewritten to disk on every append, and summarised as the most recent rows
//! plus a total count.

pub mod config;
pub mod types;
pub mod errors;
pub mod validation;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{JournalError, JournalResult};
pub use storage::{RecordStore, Table};
pub use types::*;
