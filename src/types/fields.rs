//! Enumerated record fields: market segment, contract type and trade side

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::FieldParseError;

/// Market category a trade was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "NIFTY OPT")]
    NiftyOptions,
    #[serde(rename = "NIFTY FUT")]
    NiftyFutures,
    #[serde(rename = "STOCK OPT")]
    StockOptions,
    #[serde(rename = "STOCK FUT")]
    StockFutures,
    #[serde(rename = "MCX FUT")]
    McxFutures,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::NiftyOptions,
        Segment::NiftyFutures,
        Segment::StockOptions,
        Segment::StockFutures,
        Segment::McxFutures,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Segment::NiftyOptions => "NIFTY OPT",
            Segment::NiftyFutures => "NIFTY FUT",
            Segment::StockOptions => "STOCK OPT",
            Segment::StockFutures => "STOCK FUT",
            Segment::McxFutures => "MCX FUT",
        }
    }
}

/// Contract type: call, put or future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    #[serde(rename = "CE")]
    Call,
    #[serde(rename = "PE")]
    Put,
    #[serde(rename = "FUT")]
    Future,
}

impl OptionType {
    pub const ALL: [OptionType; 3] = [OptionType::Call, OptionType::Put, OptionType::Future];

    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "CE",
            OptionType::Put => "PE",
            OptionType::Future => "FUT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Buy, Action::Sell];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        }
    }
}

// Labels compare case-insensitively with runs of whitespace collapsed,
// so "nifty  opt" and "NIFTY OPT" name the same segment.
fn parse_label<T: Copy>(
    field: &'static str,
    input: &str,
    candidates: &[T],
    label: fn(&T) -> &'static str,
) -> Result<T, FieldParseError> {
    let wanted = input.split_whitespace().collect::<Vec<_>>().join(" ");
    candidates
        .iter()
        .copied()
        .find(|c| label(c).eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| FieldParseError {
            field,
            value: input.to_string(),
            expected: candidates.iter().map(label).collect::<Vec<_>>().join(", "),
        })
}

macro_rules! label_impls {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = FieldParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_label($field, s, &<$ty>::ALL, <$ty>::label)
            }
        }
    };
}

label_impls!(Segment, "segment");
label_impls!(OptionType, "type");
label_impls!(Action, "action");
