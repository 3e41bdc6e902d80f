//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is an error with the expected status and `error` message
pub fn assert_error(response: &TestResponse, expected_status: StatusCode, expected_message: &str) {
    assert_status(response, expected_status);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["error"].as_str(),
        Some(expected_message),
        "Unexpected error message. Full response: {}",
        response.text()
    );
}

/// Assert the string is a well-formed "#rrggbb" hex color
pub fn assert_hex_color(value: &str) {
    assert_eq!(value.len(), 7, "Expected 7-character hex color, got {value:?}");
    assert!(value.starts_with('#'), "Expected leading '#', got {value:?}");
    assert!(
        value[1..].chars().all(|c| c.is_ascii_hexdigit()),
        "Expected hex digits, got {value:?}"
    );
}
