//! Roman numeral to integer decoding.
//!
//! Decoding is two passes. A loose reader computes a value using the usual
//! additive/subtractive rules without judging legality, then the value is
//! re-encoded and compared against the input. Anything that does not round
//! trip to itself is rejected, so the accepted language is exactly the
//! encoder's output set.

use crate::numeral::charset::is_valid_roman_charset;
use crate::numeral::encode::int_to_roman;
use crate::numeral::error::{ConversionError, ConversionResult, Notation};
use crate::numeral::tables::{in_range, symbol_value};

/// Parse `roman` (any ASCII case) and return its value if it is canonical.
pub fn roman_to_int_strict(roman: &str) -> ConversionResult<u32> {
    if !is_valid_roman_charset(roman) {
        return Err(ConversionError::Charset(Notation::Roman));
    }

    let normalized = roman.to_ascii_uppercase();
    let value = parse_loose(&normalized)?;

    if !in_range(value) {
        return Err(ConversionError::Range(Notation::Roman));
    }

    // in_range guarantees the value fits.
    let value = value as u32;
    let canonical = int_to_roman(i64::from(value))?;
    if canonical != normalized {
        return Err(ConversionError::NonCanonical);
    }

    Ok(value)
}

/// Conventional left-to-right reading of an uppercase numeral.
///
/// A smaller symbol followed by a larger one is read as a subtractive pair,
/// even for pairs no canonical numeral uses ("IL", "VX"). Only unknown
/// symbols are errors. The total saturates so arbitrarily long input cannot
/// overflow.
fn parse_loose(normalized: &str) -> ConversionResult<u64> {
    let symbols: Vec<char> = normalized.chars().collect();
    let mut total: u64 = 0;
    let mut i = 0;

    while i < symbols.len() {
        let current = lookup(symbols[i])?;

        if let Some(&next_symbol) = symbols.get(i + 1) {
            let next = lookup(next_symbol)?;
            if current < next {
                total = total.saturating_add(u64::from(next - current));
                i += 2;
                continue;
            }
        }

        total = total.saturating_add(u64::from(current));
        i += 1;
    }

    Ok(total)
}

fn lookup(symbol: char) -> ConversionResult<u32> {
    symbol_value(symbol).ok_or(ConversionError::UnknownSymbol(symbol))
}
