//! Display projection of the journal

use rust_decimal::Decimal;
use serde::Serialize;
use super::TradeRecord;

/// Number of most recent trades shown in a snapshot.
pub const RECENT_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    #[serde(flatten)]
    pub record: TradeRecord,
    /// `None` when Price × Qty overflows.
    #[serde(rename = "Value", with = "rust_decimal::serde::str_option")]
    pub value: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Most recent first.
    pub rows: Vec<DisplayRow>,
    pub total_count: usize,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
