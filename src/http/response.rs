//! Response envelope.
//!
//! Every response body has the shape `{"status": ..., "result": ...}` with
//! `status` serialized first. Successes are 200 and cacheable; failures are
//! 400 and carry the error message as `result`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Envelope status marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

/// Response body wrapper. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: Status,
    pub result: T,
}

impl<T> Envelope<T> {
    pub fn ok(result: T) -> Self {
        Self {
            status: Status::Ok,
            result,
        }
    }
}

impl Envelope<String> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            result: message.into(),
        }
    }
}

/// Successful Roman → integer conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanToIntResult {
    /// Path segment as received.
    pub input: String,
    /// Uppercased input.
    pub normalized: String,
    pub value: u32,
}

/// Successful integer → Roman conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntToRomanResult {
    /// Parsed integer, leading zeros dropped.
    pub input: i64,
    pub roman: String,
}

/// 200 envelope with the given `Cache-Control` value.
pub fn rest_response<T: Serialize>(result: T, cache_control: &HeaderValue) -> Response {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, cache_control.clone())],
        Json(Envelope::ok(result)),
    )
        .into_response()
}

/// 400 envelope carrying `message`. Never cached.
pub fn rest_error(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(Envelope::error(message))).into_response()
}
