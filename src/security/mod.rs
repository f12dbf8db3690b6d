//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (cap path input length)
//!     → handler
//! Outgoing response:
//!     → headers.rs (nosniff, frame options)
//! ```
//!
//! # Design Decisions
//! - Fail closed: oversized input is rejected, never truncated
//! - No trust in client input

pub mod headers;
pub mod limits;

pub use limits::{InputLimits, LimitError};
