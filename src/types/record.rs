//! The trade record and its fixed column schema

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use super::{Action, OptionType, Segment};

/// Column order of the journal file. Every table carries exactly these.
pub const COLUMNS: [&str; 10] = [
    "Date", "Segment", "Instrument", "Type", "Expiry", "Strike", "Action", "Qty", "Price", "Notes",
];

/// One logged trade. Rows are never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Segment")]
    pub segment: Segment,
    #[serde(rename = "Instrument")]
    pub instrument: String,
    #[serde(rename = "Type")]
    pub option_type: OptionType,
    #[serde(rename = "Expiry")]
    pub expiry: NaiveDate,
    /// Zero marks a contract without a strike (futures).
    #[serde(rename = "Strike", with = "rust_decimal::serde::str")]
    pub strike: Decimal,
    #[serde(rename = "Action")]
    pub action: Action,
    #[serde(rename = "Qty")]
    pub qty: u32,
    #[serde(rename = "Price", with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl TradeRecord {
    /// Price × Qty, `None` when the product does not fit in a `Decimal`.
    /// Derived for display, never stored.
    pub fn value(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.qty))
    }

    pub fn strike_if_applicable(&self) -> Option<Decimal> {
        if self.strike.is_zero() {
            None
        } else {
            Some(self.strike)
        }
    }

    /// Copy of the record in its stored form: instrument uppercased.
    pub fn normalized(&self) -> Self {
        Self {
            instrument: self.instrument.to_uppercase(),
            ..self.clone()
        }
    }
}
