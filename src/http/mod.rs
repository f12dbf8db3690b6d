//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign x-request-id)
//!     → handlers.rs (length cap)
//!     → convert.rs (charset check, conversion)
//!     → response.rs (status/result envelope, cache header)
//!     → Send to client
//! ```

pub mod convert;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use convert::{convert_decimal, convert_roman, Rejection, INVALID_ROMAN_INPUT};
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::{Envelope, IntToRomanResult, RomanToIntResult, Status};
pub use server::{AppState, HttpServer};
