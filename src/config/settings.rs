//! Journal configuration settings and environment variable handling

use std::env;
use std::path::PathBuf;

pub const DEFAULT_JOURNAL_FILE: &str = "trade_journal.csv";
pub const DEFAULT_LOG_DIR: &str = "output/logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub journal_file: PathBuf,
    /// `None` disables the rolling log file.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            journal_file: lookup("TRADE_JOURNAL_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_JOURNAL_FILE)),
            log_dir: match lookup("TRADE_JOURNAL_LOG_DIR") {
                Some(dir) if dir.trim().is_empty() => None,
                Some(dir) => Some(PathBuf::from(dir)),
                None => Some(PathBuf::from(DEFAULT_LOG_DIR)),
            },
        }
    }
}
