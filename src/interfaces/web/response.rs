//! Response assembly shared by every handler.
//!
//! CORS headers are added for all responses by the router's `CorsLayer`, so the
//! helpers here only deal with status, content headers and body.

use super::builtin_files::not_found_page;
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type of the JSON endpoints, kept from the device's original web UI.
pub const JSON_CONTENT_TYPE: &str = "text/javascript; charset=utf-8";

pub const HTML_CONTENT_TYPE: &str = "text/html";

/// `302 Found` with a `Location` header and no body.
pub fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// `200` with an uncached JSON body.
pub fn json_no_cache<T: Serialize>(value: T) -> Response {
    (
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONTENT_TYPE, JSON_CONTENT_TYPE),
        ],
        Json(value),
    )
        .into_response()
}

pub fn file(contents: Vec<u8>, content_type: &str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        contents,
    )
        .into_response()
}

/// `404` with the built-in page.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
        not_found_page(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_has_location_and_no_body() {
        let response = redirect("/button.htm?B1=1&B2=0");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/button.htm?B1=1&B2=0"
        );
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_json_headers_override_default_content_type() {
        let response = json_no_cache(serde_json::json!({ "ok": true }));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_not_found_is_html() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], HTML_CONTENT_TYPE);
    }
}
