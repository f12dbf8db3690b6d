//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All problems are
//! collected so an operator sees every mistake in one run.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;
use crate::numeral::MAX_CANONICAL_LEN;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bind = config.listener.bind_address.parse::<SocketAddr>();
    if bind.is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must be greater than zero",
        ));
    }

    if config.security.max_input_len < MAX_CANONICAL_LEN {
        errors.push(ValidationError::new(
            "security.max_input_len",
            format!(
                "must be at least {} to admit every canonical numeral",
                MAX_CANONICAL_LEN
            ),
        ));
    }

    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("'{}' is not a log level", config.observability.log_level),
        ));
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(metrics) => {
                if bind.as_ref().is_ok_and(|b| *b == metrics) {
                    errors.push(ValidationError::new(
                        "observability.metrics_address",
                        "must differ from listener.bind_address",
                    ));
                }
            }
            Err(_) => errors.push(ValidationError::new(
                "observability.metrics_address",
                format!(
                    "'{}' is not a socket address",
                    config.observability.metrics_address
                ),
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
