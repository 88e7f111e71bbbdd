//! JSON response construction and CORS headers.
//!
//! Every response the service produces — success, error, preflight — carries
//! `Access-Control-Allow-Origin: *` plus the request-header allow-list the
//! calling UI needs, and JSON responses carry `Content-Type:
//! application/json`. Error bodies are always the single-field shape
//! `{"error": "..."}`.

use http::header::HeaderValue;
use serde::Serialize;

use crate::body::JsonBody;

/// The request headers browsers are allowed to send cross-origin.
pub const ALLOWED_REQUEST_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Serialize a value into a JSON response with the given status.
///
/// Falls back to a 500 error body if serialization fails, which only
/// happens for non-string-keyed maps — not a shape this service produces.
pub fn json_response<T: Serialize>(status: http::StatusCode, value: &T) -> http::Response<JsonBody> {
    match serde_json::to_string(value) {
        Ok(body) => build_json(status, body),
        Err(_) => build_json(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"Internal error"}"#.to_owned(),
        ),
    }
}

/// Build a `{"error": message}` response with the given status.
pub fn error_response(status: http::StatusCode, message: &str) -> http::Response<JsonBody> {
    #[derive(Serialize)]
    struct ErrorBody<'a> {
        error: &'a str,
    }
    json_response(status, &ErrorBody { error: message })
}

/// Produce the CORS preflight response: empty body, permissive headers.
#[must_use]
pub fn cors_preflight_response() -> http::Response<JsonBody> {
    let mut response = http::Response::builder()
        .status(http::StatusCode::OK)
        .body(JsonBody::empty())
        .expect("static preflight response should be valid");
    add_cors_headers(response.headers_mut());
    response
}

/// Produce the health check response.
#[must_use]
pub fn health_check_response() -> http::Response<JsonBody> {
    build_json(
        http::StatusCode::OK,
        r#"{"status":"running","service":"presign"}"#.to_owned(),
    )
}

/// Add the CORS headers every response carries.
pub fn add_cors_headers(headers: &mut http::HeaderMap) {
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOWED_REQUEST_HEADERS),
    );
}

/// Add common response headers: CORS plus the request id.
pub fn add_common_headers(
    mut response: http::Response<JsonBody>,
    request_id: &str,
) -> http::Response<JsonBody> {
    let headers = response.headers_mut();
    add_cors_headers(headers);
    if let Ok(hv) = HeaderValue::from_str(request_id) {
        headers.insert("x-request-id", hv);
    }
    response
}

fn build_json(status: http::StatusCode, body: String) -> http::Response<JsonBody> {
    http::Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(JsonBody::from_string(body))
        .expect("JSON response should be valid")
}
