//! Handler for path redirects.

use axum::{
    extract::State,
    http::{Method, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Origin the request path is parsed against. Only the resulting path is used.
const KEY_BASE: &str = "http://localhost";

/// Builds the lookup key from the request URI.
///
/// The path is run through WHATWG URL parsing, so `.`/`..` segments
/// (including `%2e%2e`) are resolved and characters outside the path set are
/// percent-encoded. Nothing is decoded, case-folded or trailing-slash
/// trimmed. Query and fragment never reach the key.
pub fn lookup_key(uri: &Uri) -> String {
    let raw = uri.path();
    match Url::parse(&format!("{KEY_BASE}{raw}")) {
        Ok(url) => url.path().to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Redirects a request path to its stored target URL.
///
/// # Endpoint
///
/// Any method, any path (installed as the router fallback).
///
/// # Request Flow
///
/// 1. Reject anything but `GET` with 405, without touching the store
/// 2. Parse the URI path into the lookup key (query string ignored)
/// 3. Look the key up and validate the stored target
/// 4. Answer with the configured redirect status and a `Location` header
///
/// # Errors
///
/// - 405 Method Not Allowed for non-`GET` requests
/// - 404 Not Found if the path has no mapping
/// - 500 Internal Server Error if the store fails or the stored target is not
///   an absolute URL
pub async fn redirect_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed(method.to_string()));
    }

    let key = lookup_key(&uri);
    let target = state.resolver.resolve(&key).await?;

    debug!(path = %key, location = %target, status = %state.redirect_status, "Redirecting");

    // A serialized Url is visible ASCII, so the header conversion cannot fail.
    Ok((
        state.redirect_status.status_code(),
        [(header::LOCATION, String::from(target))],
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> String {
        lookup_key(&raw.parse::<Uri>().unwrap())
    }

    #[test]
    fn test_plain_path_is_unchanged() {
        assert_eq!(key("/old-page"), "/old-page");
        assert_eq!(key("/"), "/");
        assert_eq!(key("/Docs/"), "/Docs/");
    }

    #[test]
    fn test_query_is_dropped() {
        assert_eq!(key("/old-page?utm=1"), "/old-page");
    }

    #[test]
    fn test_dot_segments_are_resolved() {
        assert_eq!(key("/a/../old-page"), "/old-page");
        assert_eq!(key("/./old-page"), "/old-page");
        assert_eq!(key("/x/%2e%2e/old-page"), "/old-page");
        assert_eq!(key("/x/%2E%2E/old-page"), "/old-page");
        assert_eq!(key("/../old-page"), "/old-page");
    }

    #[test]
    fn test_path_set_is_percent_encoded() {
        assert_eq!(key("/a{b}"), "/a%7Bb%7D");
    }

    #[test]
    fn test_existing_escapes_are_not_decoded() {
        assert_eq!(key("/caf%C3%A9"), "/caf%C3%A9");
        assert_eq!(key("/a%2Fb"), "/a%2Fb");
    }

    #[test]
    fn test_double_slash_stays_in_path() {
        assert_eq!(key("//evil.example/x"), "//evil.example/x");
    }

    #[test]
    fn test_absolute_form_uses_path_only() {
        assert_eq!(key("http://other.example/old-page?x=1"), "/old-page");
    }
}
