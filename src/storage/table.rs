//! In-memory trade table and its display snapshot

use crate::types::{COLUMNS, DisplayRow, RECENT_ROWS, Snapshot, TradeRecord};

/// Ordered trades, oldest first. Only ever grows by appending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<TradeRecord>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// New table with `record` at the end; `self` is left as it was.
    pub fn with_appended(&self, record: TradeRecord) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend_from_slice(&self.records);
        records.push(record);
        Self { records }
    }

    /// Last few trades, most recent first, each with its value, plus the total count.
    pub fn snapshot(&self) -> Snapshot {
        let rows = self
            .records
            .iter()
            .rev()
            .take(RECENT_ROWS)
            .map(|record| DisplayRow {
                value: record.value(),
                record: record.clone(),
            })
            .collect();

        Snapshot {
            rows,
            total_count: self.records.len(),
        }
    }
}
