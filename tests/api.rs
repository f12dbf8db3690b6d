//! End-to-end tests against a running service.

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::StatusCode;
use roman_service::config::ServiceConfig;
use roman_service::http::{Envelope, IntToRomanResult, RomanToIntResult, Status};
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_health() {
    let service = common::start_service().await;
    let res = service.get("/health").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CACHE_CONTROL], "public, max-age=86400");
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(res.text().await.unwrap(), r#"{"status":"OK","result":"OK"}"#);
}

#[tokio::test]
async fn test_roman_to_int_success() {
    let service = common::start_service().await;
    let res = service.get("/roman_to_int/xiv").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CACHE_CONTROL], "public, max-age=86400");
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"status":"OK","result":{"input":"xiv","normalized":"XIV","value":14}}"#
    );

    let body: Envelope<RomanToIntResult> =
        service.get("/roman_to_int/MCMXCIV").await.json().await.unwrap();
    assert_eq!(body.status, Status::Ok);
    assert_eq!(body.result.value, 1994);
}

#[tokio::test]
async fn test_roman_to_int_errors() {
    let service = common::start_service().await;

    let cases = [
        (
            "/roman_to_int/MCZ",
            "Invalid Roman input: allowed characters are IVXLCDM only (case-insensitive).",
        ),
        (
            "/roman_to_int/IIII",
            "Roman numeral is not canonical (permissive forms like IIII are rejected).",
        ),
        (
            "/roman_to_int/IL",
            "Roman numeral is not canonical (permissive forms like IIII are rejected).",
        ),
        (
            "/roman_to_int/MMMM",
            "Roman numeral out of supported range (1..3999).",
        ),
        (
            "/roman_to_int/X%20I",
            "Invalid Roman input: allowed characters are IVXLCDM only (case-insensitive).",
        ),
    ];

    for (path, message) in cases {
        let res = service.get(path).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
        assert!(res.headers().get(CACHE_CONTROL).is_none(), "{path}");
        let body: Envelope<String> = res.json().await.unwrap();
        assert_eq!(body.status, Status::Error);
        assert_eq!(body.result, message, "{path}");
    }
}

#[tokio::test]
async fn test_int_to_roman_success() {
    let service = common::start_service().await;
    let res = service.get("/int_to_roman/944").await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CACHE_CONTROL], "public, max-age=86400");
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"status":"OK","result":{"input":944,"roman":"CMXLIV"}}"#
    );

    let body: Envelope<IntToRomanResult> =
        service.get("/int_to_roman/0012").await.json().await.unwrap();
    assert_eq!(body.result.input, 12);
    assert_eq!(body.result.roman, "XII");
}

#[tokio::test]
async fn test_int_to_roman_errors() {
    let service = common::start_service().await;

    let cases = [
        ("/int_to_roman/12a", "Invalid integer input: digits only (0-9)."),
        ("/int_to_roman/-5", "Invalid integer input: digits only (0-9)."),
        ("/int_to_roman/0", "Integer out of supported range (1..3999)."),
        ("/int_to_roman/4000", "Integer out of supported range (1..3999)."),
        (
            "/int_to_roman/99999999999999999999",
            "Integer out of supported range (1..3999).",
        ),
    ];

    for (path, message) in cases {
        let res = service.get(path).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "ERROR", "{path}");
        assert_eq!(body["result"], message, "{path}");
    }
}

#[tokio::test]
async fn test_input_length_limit() {
    let mut config = ServiceConfig::default();
    config.security.max_input_len = 20;
    let service = common::start_service_with(config).await;

    let long = "I".repeat(21);
    let res = service.get(&format!("/roman_to_int/{long}")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Envelope<String> = res.json().await.unwrap();
    assert_eq!(body.result, "Input exceeds maximum length of 20 characters.");

    let padded = format!("{}1", "0".repeat(20));
    let res = service.get(&format!("/int_to_roman/{padded}")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_and_security_headers() {
    let service = common::start_service().await;

    let res = service.get("/health").await;
    let id = res.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert_eq!(res.headers()["x-frame-options"], "DENY");

    let res = service
        .client
        .get(service.url("/health"))
        .header("x-request-id", "client-supplied")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "client-supplied");
}

#[tokio::test]
async fn test_security_headers_can_be_disabled() {
    let mut config = ServiceConfig::default();
    config.security.enable_headers = false;
    let service = common::start_service_with(config).await;

    let res = service.get("/health").await;
    assert!(res.headers().get("x-content-type-options").is_none());
}

#[tokio::test]
async fn test_custom_cache_max_age() {
    let mut config = ServiceConfig::default();
    config.cache.max_age_secs = 60;
    let service = common::start_service_with(config).await;

    let res = service.get("/int_to_roman/1").await;
    assert_eq!(res.headers()[CACHE_CONTROL], "public, max-age=60");
}

#[tokio::test]
async fn test_unknown_route() {
    let service = common::start_service().await;
    assert_eq!(service.get("/nope").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        service.get("/roman_to_int/").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_round_trip_over_http() {
    let service = common::start_service().await;

    for n in [1, 4, 9, 14, 40, 90, 400, 944, 1994, 2024, 3888, 3999] {
        let to_roman: Envelope<IntToRomanResult> = service
            .get(&format!("/int_to_roman/{n}"))
            .await
            .json()
            .await
            .unwrap();
        let roman = to_roman.result.roman;

        let back: Envelope<RomanToIntResult> = service
            .get(&format!("/roman_to_int/{}", roman.to_lowercase()))
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(back.result.value, n);
        assert_eq!(back.result.normalized, roman);
    }
}
