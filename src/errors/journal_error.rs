//! Custom error types for the trade journal

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Trade journal {path} is corrupt: {reason}")]
    StorageCorrupt {
        path: PathBuf,
        reason: String,
    },

    #[error("Unable to read trade journal {path}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Trade rejected: {field} {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("Unable to write trade journal {path}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl JournalError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::StorageCorrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Returned by `FromStr` on the enumerated record fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {field} '{value}', expected one of: {expected}")]
pub struct FieldParseError {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

pub type JournalResult<T> = Result<T, JournalError>;
