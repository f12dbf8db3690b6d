//! Input → envelope payload conversions shared by the handlers and the CLI.
//!
//! These run the route-level charset check before the strict conversion so
//! both callers report exactly the same messages.

use crate::http::response::{IntToRomanResult, RomanToIntResult};
use crate::numeral::{
    decimal_to_roman, is_valid_roman_charset, roman_to_int_strict, ConversionError,
};

/// Message for path segments that are not Roman letters.
pub const INVALID_ROMAN_INPUT: &str =
    "Invalid Roman input: allowed characters are IVXLCDM only (case-insensitive).";

/// A rejected input: metrics outcome label plus the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: &'static str,
    pub message: String,
}

impl Rejection {
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ConversionError> for Rejection {
    fn from(e: ConversionError) -> Self {
        Self::new(e.kind(), e.to_string())
    }
}

/// Convert a raw Roman path segment.
pub fn convert_roman(roman: &str) -> Result<RomanToIntResult, Rejection> {
    if !is_valid_roman_charset(roman) {
        return Err(Rejection::new("charset", INVALID_ROMAN_INPUT));
    }

    let value = roman_to_int_strict(roman)?;
    Ok(RomanToIntResult {
        input: roman.to_string(),
        normalized: roman.to_ascii_uppercase(),
        value,
    })
}

/// Convert a raw decimal path segment.
pub fn convert_decimal(value: &str) -> Result<IntToRomanResult, Rejection> {
    let (input, roman) = decimal_to_roman(value)?;
    Ok(IntToRomanResult { input, roman })
}
