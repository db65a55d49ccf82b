//! Common helper functions for API handlers.
//!
//! Response builders pin status and content type explicitly on every path;
//! nothing is left to framework defaults, because Slack renders relayed
//! bodies based on the declared content type.

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::backend::{HEADER_SLACK_SIGNATURE, HEADER_SLACK_TIMESTAMP};
use crate::core::models::SlackHeaders;

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response with an empty body; the all-purpose Slack ack.
#[must_use]
pub fn ok_empty() -> Response {
    relay_json(200, String::new())
}

/// Returns the fixed rejection for any method other than POST.
#[must_use]
pub fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
}

/// Relay a downstream body with the content type pinned to JSON.
#[must_use]
pub fn relay_json(status: u16, body: String) -> Response {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::OK),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

// ============================================================================
// Body and Header Helpers
// ============================================================================

/// Collapse a `"null"` or blank downstream body to an empty ack body.
///
/// PostgREST answers `null` for RPC functions that return nothing; relayed
/// verbatim, Slack would render the four characters inside the modal.
#[must_use]
pub fn normalize_submission_body(body: &str) -> &str {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        ""
    } else {
        body
    }
}

/// Extract Slack's verification headers from the inbound request, absent
/// headers standing in as empty strings.
#[must_use]
pub fn slack_headers(headers: &HeaderMap) -> SlackHeaders {
    SlackHeaders {
        signature: header_or_empty(headers, HEADER_SLACK_SIGNATURE),
        timestamp: header_or_empty(headers, HEADER_SLACK_TIMESTAMP),
    }
}

/// Read a single header value as text, defaulting to empty.
#[must_use]
pub fn header_or_empty(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
