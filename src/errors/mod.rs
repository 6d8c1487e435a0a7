//! Error types for the journal

pub mod journal_error;

pub use journal_error::*;
