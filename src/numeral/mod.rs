//! Roman numeral conversion core.
//!
//! # Data Flow
//! ```text
//! "mcmxciv"
//!     → charset.rs (alphabet check)
//!     → decode.rs (uppercase, loose read → 1994)
//!     → encode.rs (1994 → "MCMXCIV")
//!     → compare with normalized input → Ok(1994)
//! ```
//!
//! Everything here is pure and synchronous; the tables in `tables.rs` are
//! compile-time constants, so every function is safe to call from any task.

pub mod charset;
pub mod decode;
pub mod encode;
pub mod error;
pub mod tables;
pub mod value;

pub use charset::{is_valid_int_charset, is_valid_roman_charset};
pub use decode::roman_to_int_strict;
pub use encode::int_to_roman;
pub use error::{ConversionError, ConversionResult, Notation};
pub use tables::{MAX_CANONICAL_LEN, MAX_VALUE, MIN_VALUE};
pub use value::{decimal_to_roman, parse_decimal, Numeral};
