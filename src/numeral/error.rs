//! Conversion error taxonomy.

use thiserror::Error;

/// Which side of a conversion an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// A Roman numeral string.
    Roman,
    /// A decimal integer.
    Integer,
}

impl Notation {
    fn label(&self) -> &'static str {
        match self {
            Notation::Roman => "Roman numeral",
            Notation::Integer => "Integer",
        }
    }

    fn charset_message(&self) -> &'static str {
        match self {
            Notation::Roman => {
                "Roman numeral contains invalid characters; allowed: IVXLCDM (case-insensitive)."
            }
            Notation::Integer => "Invalid integer input: digits only (0-9).",
        }
    }
}

/// Errors produced by the numeral conversions.
///
/// The `Display` output is the message returned to HTTP clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input contains characters outside the expected alphabet.
    #[error("{}", .0.charset_message())]
    Charset(Notation),

    /// Input is well-formed but its value lies outside 1..3999.
    #[error("{} out of supported range (1..3999).", .0.label())]
    Range(Notation),

    /// Input parses but is not the unique canonical spelling of its value.
    #[error("Roman numeral is not canonical (permissive forms like IIII are rejected).")]
    NonCanonical,

    /// Unrecognized symbol met while parsing.
    #[error("Invalid Roman character encountered.")]
    UnknownSymbol(char),
}

impl ConversionError {
    /// Stable label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Charset(_) => "charset",
            ConversionError::Range(_) => "range",
            ConversionError::NonCanonical => "non_canonical",
            ConversionError::UnknownSymbol(_) => "parse",
        }
    }
}

/// Result type for numeral conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;
