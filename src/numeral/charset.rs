//! Alphabet checks run before any semantic parsing.
//!
//! Keeping these separate lets callers report "malformed input" differently
//! from "well-formed but out of range or non-canonical".

/// True iff `s` is non-empty and only contains `IVXLCDM` in either ASCII case.
// ASCII folding only: Unicode case variants such as 'ı' and 'İ' are rejected
// here rather than folded to 'I'.
pub fn is_valid_roman_charset(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            matches!(
                c.to_ascii_uppercase(),
                'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'
            )
        })
}

/// True iff `s` is non-empty and only contains ASCII digits.
pub fn is_valid_int_charset(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_charset() {
        assert!(is_valid_roman_charset("MCMXCIV"));
        assert!(is_valid_roman_charset("mcmxciv"));
        assert!(is_valid_roman_charset("IIII"));
        assert!(!is_valid_roman_charset("MCZ"));
        assert!(!is_valid_roman_charset("X I"));
        assert!(!is_valid_roman_charset("12"));
        assert!(!is_valid_roman_charset(""));
    }

    #[test]
    fn test_roman_charset_rejects_non_ascii_lookalikes() {
        // Dotless i uppercases to 'I' outside ASCII rules.
        assert!(!is_valid_roman_charset("\u{131}"));
        assert!(!is_valid_roman_charset("Ⅻ"));
    }

    #[test]
    fn test_int_charset() {
        assert!(is_valid_int_charset("0"));
        assert!(is_valid_int_charset("3999"));
        assert!(is_valid_int_charset("0012"));
        assert!(!is_valid_int_charset("12a"));
        assert!(!is_valid_int_charset("-5"));
        assert!(!is_valid_int_charset("+5"));
        assert!(!is_valid_int_charset("١٢"));
        assert!(!is_valid_int_charset(""));
    }
}
