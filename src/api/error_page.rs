//! Minimal HTML error documents.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Reason phrase for the statuses the resolver produces.
///
/// Anything else gets an empty phrase.
pub fn reason_phrase(status: StatusCode) -> &'static str {
    match status.as_u16() {
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// Renders the error document for `status`.
///
/// Title and heading are `"<code> <reason>"`, or just the code when there is
/// no reason phrase.
pub fn render(status: StatusCode) -> String {
    let code = status.as_u16();
    let heading = match reason_phrase(status) {
        "" => code.to_string(),
        reason => format!("{} {}", code, reason),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
  <head><title>{heading}</title></head>
  <body><h1>{heading}</h1></body>
</html>
"#
    )
}

/// Builds the full error response: status, `Content-Type: text/html`, body.
pub fn error_response(status: StatusCode) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/html"))],
        render(status),
    )
        .into_response()
}
