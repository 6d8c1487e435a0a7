//! Price and strike validation functions

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use crate::errors::{JournalError, JournalResult};

pub fn validate_price(price: Decimal) -> JournalResult<()> {
    if price < dec!(0) {
        return Err(JournalError::validation("price", format!("must not be negative, got {}", price)));
    }

    Ok(())
}

/// Zero is accepted and means the contract has no strike.
pub fn validate_strike(strike: Decimal) -> JournalResult<()> {
    if strike < dec!(0) {
        return Err(JournalError::validation("strike", format!("must not be negative, got {}", strike)));
    }

    Ok(())
}

/// Price × Qty must stay representable, or the record could never be displayed.
pub fn validate_value(price: Decimal, qty: u32) -> JournalResult<()> {
    if price.checked_mul(Decimal::from(qty)).is_none() {
        return Err(JournalError::validation("price", "price × qty overflows"));
    }

    Ok(())
}
