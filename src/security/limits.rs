//! Input size limits.
//!
//! Path inputs are capped before any parsing so arbitrarily long junk never
//! reaches the conversion core.

use thiserror::Error;

use crate::config::SecurityConfig;

/// Input rejected by a limit check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("Input exceeds maximum length of {max} characters.")]
    TooLong { max: usize, actual: usize },
}

/// Limits applied to path inputs.
#[derive(Debug, Clone, Copy)]
pub struct InputLimits {
    max_len: usize,
}

impl InputLimits {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(config.max_input_len)
    }

    /// Reject input longer than the configured maximum (in characters).
    pub fn check(&self, input: &str) -> Result<(), LimitError> {
        let actual = input.chars().count();
        if actual > self.max_len {
            return Err(LimitError::TooLong {
                max: self.max_len,
                actual,
            });
        }
        Ok(())
    }
}
