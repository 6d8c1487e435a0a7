//! Whole-record validation applied before a trade is appended

use tracing::warn;
use crate::{
    errors::{JournalError, JournalResult},
    types::TradeRecord,
    validation::{validate_price, validate_strike, validate_value},
};

pub fn validate_quantity(qty: u32) -> JournalResult<()> {
    if qty < 1 {
        return Err(JournalError::validation("qty", "must be at least 1"));
    }

    Ok(())
}

/// Checks every field constraint, reporting the first one violated.
/// Segment, type and action are already constrained by their enum types.
pub fn validate_record(record: &TradeRecord) -> JournalResult<()> {
    let result = validate_strike(record.strike)
        .and_then(|_| validate_quantity(record.qty))
        .and_then(|_| validate_price(record.price))
        .and_then(|_| validate_value(record.price, record.qty));

    if let Err(e) = &result {
        warn!(instrument = %record.instrument, error = %e, "Rejected trade record");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, OptionType, Segment};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record() -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            segment: Segment::StockOptions,
            instrument: "reliance".to_string(),
            option_type: OptionType::Put,
            expiry: NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
            strike: dec!(2500),
            action: Action::Buy,
            qty: 250,
            price: dec!(31.35),
            notes: "hedge".to_string(),
        }
    }

    fn rejected_field(record: &TradeRecord) -> &'static str {
        match validate_record(record) {
            Err(JournalError::Validation { field, .. }) => field,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn accepts_well_formed_record() {
        assert!(validate_record(&record()).is_ok());
    }

    #[test]
    fn accepts_zero_price_and_zero_strike() {
        let mut r = record();
        r.price = dec!(0);
        r.strike = dec!(0);
        assert!(validate_record(&r).is_ok());
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut r = record();
        r.qty = 0;
        assert_eq!(rejected_field(&r), "qty");
    }

    #[test]
    fn rejects_negative_price() {
        let mut r = record();
        r.price = dec!(-0.05);
        assert_eq!(rejected_field(&r), "price");
    }

    #[test]
    fn rejects_negative_strike() {
        let mut r = record();
        r.strike = dec!(-50);
        assert_eq!(rejected_field(&r), "strike");
    }

    #[test]
    fn accepts_blank_instrument() {
        let mut r = record();
        r.instrument = "   ".to_string();
        assert!(validate_record(&r).is_ok());
        r.instrument = String::new();
        assert!(validate_record(&r).is_ok());
    }

    #[test]
    fn rejects_value_that_overflows() {
        let mut r = record();
        r.price = Decimal::MAX;
        r.qty = 2;
        assert_eq!(rejected_field(&r), "price");

        r.qty = 1;
        assert!(validate_record(&r).is_ok());
    }
}
