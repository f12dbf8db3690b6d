//! Range-checked numeral value.

use std::fmt;
use std::str::FromStr;

use crate::numeral::charset::is_valid_int_charset;
use crate::numeral::decode::roman_to_int_strict;
use crate::numeral::encode::int_to_roman;
use crate::numeral::error::{ConversionError, ConversionResult, Notation};
use crate::numeral::tables::in_range;

/// A value known to lie in `1..=3999`.
///
/// `FromStr` runs the strict Roman parser; `Display` prints the canonical
/// spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(u16);

impl Numeral {
    /// Create a numeral from an integer.
    pub fn new(value: i64) -> ConversionResult<Self> {
        u64::try_from(value)
            .ok()
            .filter(|v| in_range(*v))
            .map(|v| Self(v as u16))
            .ok_or(ConversionError::Range(Notation::Integer))
    }

    /// The integer value.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Canonical Roman spelling.
    pub fn to_roman(self) -> String {
        self.to_string()
    }
}

impl TryFrom<i64> for Numeral {
    type Error = ConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Numeral {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = roman_to_int_strict(s)?;
        Ok(Self(value as u16))
    }
}

impl From<Numeral> for u16 {
    fn from(numeral: Numeral) -> Self {
        numeral.0
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roman = int_to_roman(i64::from(self.0)).map_err(|_| fmt::Error)?;
        f.write_str(&roman)
    }
}

/// Parse a string of ASCII digits into an integer.
///
/// Leading zeros are accepted. Digit strings too large for `i64` are reported
/// as out of range rather than malformed.
pub fn parse_decimal(s: &str) -> ConversionResult<i64> {
    if !is_valid_int_charset(s) {
        return Err(ConversionError::Charset(Notation::Integer));
    }
    s.parse::<i64>()
        .map_err(|_| ConversionError::Range(Notation::Integer))
}

/// Convert a digit string straight to its canonical numeral.
pub fn decimal_to_roman(s: &str) -> ConversionResult<(i64, String)> {
    let value = parse_decimal(s)?;
    let roman = int_to_roman(value)?;
    Ok((value, roman))
}
