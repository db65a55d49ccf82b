//! Downstream PostgREST client.
//!
//! Every outbound call is first described as plain data (`DownstreamCall`)
//! and only then executed, so URL, header, and body construction can be
//! unit tested without a live server. The backend exposes RPC functions that
//! take a single unnamed text argument, which is why every forward overrides
//! the content type to `text/plain` regardless of what the body holds.

use reqwest::Client;
use std::time::Duration;

use crate::core::models::SlackHeaders;
use crate::errors::RelayError;

/// RPC function receiving raw Slack webhook bodies.
pub const RPC_SLACK_WEBHOOK: &str = "handle_slack_webhook";
/// RPC function receiving decoded modal submission payloads.
pub const RPC_VIEW_SUBMISSION: &str = "handle_view_submission";
/// RPC function receiving provisioning-system callbacks.
pub const RPC_PROVISIONING_WEBHOOK: &str = "handle_provisioning_webhook";

/// Verification headers passed through to the backend untouched.
pub const HEADER_SLACK_SIGNATURE: &str = "x-slack-signature";
pub const HEADER_SLACK_TIMESTAMP: &str = "x-slack-request-timestamp";
pub const HEADER_PROVISIONING_KEY: &str = "x-provisioning-api-key";

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// A fully-described outbound POST, built before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamCall {
    pub url: String,
    pub content_type: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

/// Status and body of a completed downstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    /// Whether the downstream call landed in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for the capacity-request PostgREST RPC surface.
pub struct BackendClient {
    base_url: String,
    service_role_key: String,
}

impl BackendClient {
    #[must_use]
    pub fn new(base_url: &str, service_role_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
        }
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rpc/{}", self.base_url, function)
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.service_role_key.clone()),
            (
                "authorization",
                format!("Bearer {}", self.service_role_key),
            ),
        ]
    }

    /// Describe the forward of a raw Slack webhook body to
    /// [`RPC_SLACK_WEBHOOK`]. Signature headers ride along as empty strings
    /// when the inbound request lacked them, so the backend always sees both.
    #[must_use]
    pub fn webhook_call(&self, body: &str, slack: &SlackHeaders) -> DownstreamCall {
        let mut headers = self.auth_headers();
        headers.push((HEADER_SLACK_SIGNATURE, slack.signature.clone()));
        headers.push((HEADER_SLACK_TIMESTAMP, slack.timestamp.clone()));

        DownstreamCall {
            url: self.rpc_url(RPC_SLACK_WEBHOOK),
            content_type: "text/plain",
            headers,
            body: body.to_string(),
        }
    }

    /// Describe the forward of a decoded modal submission payload to
    /// [`RPC_VIEW_SUBMISSION`].
    #[must_use]
    pub fn submission_call(&self, payload_text: &str, slack: &SlackHeaders) -> DownstreamCall {
        let mut headers = self.auth_headers();
        headers.push((HEADER_SLACK_SIGNATURE, slack.signature.clone()));
        headers.push((HEADER_SLACK_TIMESTAMP, slack.timestamp.clone()));

        DownstreamCall {
            url: self.rpc_url(RPC_VIEW_SUBMISSION),
            content_type: "text/plain",
            headers,
            body: payload_text.to_string(),
        }
    }

    /// Describe the forward of a provisioning-system callback to
    /// [`RPC_PROVISIONING_WEBHOOK`].
    #[must_use]
    pub fn provisioning_call(&self, body: &str, provisioning_key: &str) -> DownstreamCall {
        let mut headers = self.auth_headers();
        headers.push((HEADER_PROVISIONING_KEY, provisioning_key.to_string()));

        DownstreamCall {
            url: self.rpc_url(RPC_PROVISIONING_WEBHOOK),
            content_type: "text/plain",
            headers,
            body: body.to_string(),
        }
    }

    /// Execute a described call and collect status plus body text.
    ///
    /// A non-2xx downstream status is not an `Err` here; callers decide per
    /// branch whether to relay, normalize, or swallow it.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request could not be sent or the
    /// response body could not be read.
    pub async fn execute(&self, call: &DownstreamCall) -> Result<BackendResponse, RelayError> {
        let mut request = HTTP_CLIENT
            .post(&call.url)
            .header("content-type", call.content_type)
            .body(call.body.clone());

        for (name, value) in &call.headers {
            request = request.header(*name, value);
        }

        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(BackendResponse { status, body })
    }
}

/// POST a JSON value to a single-use Slack `response_url`.
///
/// # Errors
///
/// Returns an error if the request fails or Slack answers with a
/// non-success status.
pub async fn post_callback(response_url: &str, body: &serde_json::Value) -> Result<(), RelayError> {
    let resp = HTTP_CLIENT
        .post(response_url)
        .json(body)
        .send()
        .await
        .map_err(|e| RelayError::CallbackError(format!("POST to response_url failed: {e}")))?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(RelayError::CallbackError(format!(
            "response_url HTTP {}",
            resp.status()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BackendClient {
        BackendClient::new("https://db.example.com/rest/v1", "service-key")
    }

    fn header<'a>(call: &'a DownstreamCall, name: &str) -> Option<&'a str> {
        call.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_webhook_call_shape() {
        let slack = SlackHeaders {
            signature: "v0=abc".to_string(),
            timestamp: "1712345678".to_string(),
        };
        let call = client().webhook_call("command=%2Fcapreq&text=", &slack);

        assert_eq!(
            call.url,
            "https://db.example.com/rest/v1/rpc/handle_slack_webhook"
        );
        assert_eq!(call.content_type, "text/plain");
        assert_eq!(call.body, "command=%2Fcapreq&text=");
        assert_eq!(header(&call, "apikey"), Some("service-key"));
        assert_eq!(header(&call, "authorization"), Some("Bearer service-key"));
        assert_eq!(header(&call, HEADER_SLACK_SIGNATURE), Some("v0=abc"));
        assert_eq!(header(&call, HEADER_SLACK_TIMESTAMP), Some("1712345678"));
    }

    #[test]
    fn test_webhook_call_missing_signature_headers_become_empty() {
        let call = client().webhook_call("payload=%7B%7D", &SlackHeaders::default());

        assert_eq!(header(&call, HEADER_SLACK_SIGNATURE), Some(""));
        assert_eq!(header(&call, HEADER_SLACK_TIMESTAMP), Some(""));
    }

    #[test]
    fn test_submission_call_targets_view_submission_rpc() {
        let call = client().submission_call(r#"{"type":"view_submission"}"#, &SlackHeaders::default());

        assert_eq!(
            call.url,
            "https://db.example.com/rest/v1/rpc/handle_view_submission"
        );
        assert_eq!(call.body, r#"{"type":"view_submission"}"#);
    }

    #[test]
    fn test_provisioning_call_carries_api_key_header() {
        let call = client().provisioning_call(r#"{"request_id":"r-1"}"#, "prov-secret");

        assert_eq!(
            call.url,
            "https://db.example.com/rest/v1/rpc/handle_provisioning_webhook"
        );
        assert_eq!(header(&call, HEADER_PROVISIONING_KEY), Some("prov-secret"));
        assert_eq!(header(&call, HEADER_SLACK_SIGNATURE), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new("https://db.example.com/rest/v1/", "k");
        let call = client.webhook_call("x", &SlackHeaders::default());

        assert_eq!(
            call.url,
            "https://db.example.com/rest/v1/rpc/handle_slack_webhook"
        );
    }

    #[test]
    fn test_call_construction_is_deterministic() {
        // No state accumulates between requests: the same inputs always
        // describe the same outbound call.
        let slack = SlackHeaders {
            signature: "v0=abc".to_string(),
            timestamp: "1712345678".to_string(),
        };
        let first = client().webhook_call("payload=%7B%7D", &slack);
        let second = client().webhook_call("payload=%7B%7D", &slack);

        assert_eq!(first, second);
    }

    #[test]
    fn test_backend_response_success_range() {
        assert!(
            BackendResponse {
                status: 200,
                body: String::new()
            }
            .is_success()
        );
        assert!(
            BackendResponse {
                status: 204,
                body: String::new()
            }
            .is_success()
        );
        assert!(
            !BackendResponse {
                status: 404,
                body: String::new()
            }
            .is_success()
        );
        assert!(
            !BackendResponse {
                status: 500,
                body: String::new()
            }
            .is_success()
        );
    }
}
