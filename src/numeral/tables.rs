//! Symbol and encoding tables shared by the encoder and the parser.

/// Smallest value representable in canonical notation.
pub const MIN_VALUE: u32 = 1;

/// Largest value representable in canonical notation.
pub const MAX_VALUE: u32 = 3999;

/// Length of the longest canonical numeral (`MMMDCCCLXXXVIII`).
pub const MAX_CANONICAL_LEN: usize = 15;

/// Value of each single-letter symbol.
pub const SYMBOL_VALUES: [(char, u32); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// Greedy encoding basis, strictly descending by value.
///
/// The subtractive pairs sit between their neighbours so that a single greedy
/// pass always yields the canonical spelling.
pub const ENCODING_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Look up an uppercase symbol.
pub fn symbol_value(symbol: char) -> Option<u32> {
    SYMBOL_VALUES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, v)| *v)
}

/// Whether `value` lies in the supported range.
pub fn in_range(value: u64) -> bool {
    (MIN_VALUE as u64..=MAX_VALUE as u64).contains(&value)
}
