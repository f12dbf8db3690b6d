//! Conversion endpoints.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
};

use crate::http::convert::{convert_decimal, convert_roman, Rejection, INVALID_ROMAN_INPUT};
use crate::http::response::{rest_error, rest_response};
use crate::http::server::AppState;
use crate::numeral::{ConversionError, Notation};
use crate::observability::metrics::{record_conversion, Direction};
use crate::security::LimitError;

pub async fn health(State(state): State<AppState>) -> Response {
    rest_response("OK", &state.cache_control)
}

pub async fn roman_to_int(
    State(state): State<AppState>,
    roman: Result<Path<String>, PathRejection>,
) -> Response {
    let Ok(Path(roman)) = roman else {
        record_conversion(Direction::RomanToInt, "charset");
        return rest_error(INVALID_ROMAN_INPUT);
    };

    if let Err(e) = state.limits.check(&roman) {
        return reject_oversized(Direction::RomanToInt, e);
    }

    match convert_roman(&roman) {
        Ok(result) => {
            record_conversion(Direction::RomanToInt, "ok");
            rest_response(result, &state.cache_control)
        }
        Err(rejection) => reject(Direction::RomanToInt, &roman, rejection),
    }
}

pub async fn int_to_roman(
    State(state): State<AppState>,
    value: Result<Path<String>, PathRejection>,
) -> Response {
    let Ok(Path(value)) = value else {
        record_conversion(Direction::IntToRoman, "charset");
        return rest_error(ConversionError::Charset(Notation::Integer).to_string());
    };

    if let Err(e) = state.limits.check(&value) {
        return reject_oversized(Direction::IntToRoman, e);
    }

    match convert_decimal(&value) {
        Ok(result) => {
            record_conversion(Direction::IntToRoman, "ok");
            rest_response(result, &state.cache_control)
        }
        Err(rejection) => reject(Direction::IntToRoman, &value, rejection),
    }
}

fn reject(direction: Direction, input: &str, rejection: Rejection) -> Response {
    tracing::debug!(
        direction = direction.as_str(),
        input = %input,
        kind = rejection.kind,
        "Rejected input"
    );
    record_conversion(direction, rejection.kind);
    rest_error(rejection.message)
}

fn reject_oversized(direction: Direction, error: LimitError) -> Response {
    let LimitError::TooLong { max, actual } = &error;
    tracing::debug!(
        direction = direction.as_str(),
        max = *max,
        actual = *actual,
        "Rejected oversized input"
    );
    record_conversion(direction, "limit");
    rest_error(error.to_string())
}
