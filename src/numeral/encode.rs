//! Integer to Roman numeral encoding.

use crate::numeral::error::{ConversionError, ConversionResult, Notation};
use crate::numeral::tables::{in_range, ENCODING_TABLE, MAX_CANONICAL_LEN};

/// Encode `value` as its canonical Roman numeral.
///
/// Greedy decomposition against [`ENCODING_TABLE`]: for each group take as
/// many whole copies as fit in the remainder. No backtracking is needed since
/// the subtractive pairs are part of the table.
pub fn int_to_roman(value: i64) -> ConversionResult<String> {
    let mut remaining = u64::try_from(value)
        .ok()
        .filter(|v| in_range(*v))
        .ok_or(ConversionError::Range(Notation::Integer))?;

    let mut out = String::with_capacity(MAX_CANONICAL_LEN);
    for (base, group) in ENCODING_TABLE {
        if remaining == 0 {
            break;
        }
        let base = u64::from(base);
        let count = remaining / base;
        for _ in 0..count {
            out.push_str(group);
        }
        remaining -= base * count;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(int_to_roman(1).unwrap(), "I");
        assert_eq!(int_to_roman(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_out_of_range() {
        for n in [0, -1, 4000, i64::MIN, i64::MAX] {
            assert_eq!(
                int_to_roman(n),
                Err(ConversionError::Range(Notation::Integer)),
                "{n} should be rejected"
            );
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(int_to_roman(4).unwrap(), "IV");
        assert_eq!(int_to_roman(9).unwrap(), "IX");
        assert_eq!(int_to_roman(14).unwrap(), "XIV");
        assert_eq!(int_to_roman(40).unwrap(), "XL");
        assert_eq!(int_to_roman(944).unwrap(), "CMXLIV");
        assert_eq!(int_to_roman(1994).unwrap(), "MCMXCIV");
        assert_eq!(int_to_roman(2024).unwrap(), "MMXXIV");
        assert_eq!(int_to_roman(3888).unwrap(), "MMMDCCCLXXXVIII");
    }

    #[test]
    fn test_output_never_exceeds_longest_canonical() {
        let longest = (1..=3999)
            .map(|n| int_to_roman(n).unwrap().len())
            .max()
            .unwrap();
        assert_eq!(longest, MAX_CANONICAL_LEN);
    }
}
