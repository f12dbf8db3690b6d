//! Roman numeral conversion service library.
//!
//! The conversion core lives in [`numeral`]; everything else wraps it in an
//! HTTP service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod numeral;
pub mod observability;
pub mod security;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use numeral::{int_to_roman, roman_to_int_strict, ConversionError, Numeral};
