//! Interactive payload handling: modal submissions and deferred actions.

use axum::response::Response;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers;
use crate::backend;
use crate::core::models::SlackHeaders;
use crate::state::AppState;

/// Forward a decoded `view_submission` payload to the submission RPC and
/// relay the result.
///
/// Slack interprets a non-empty 200 body as a `response_action` for the open
/// modal, so downstream's text is relayed as-is apart from the null
/// normalization, with the content type pinned to JSON. Downstream failure
/// is logged and answered with the empty ack instead; an error status here
/// would put a retry banner in front of the user.
pub async fn handle_view_submission(
    state: &AppState,
    payload: &Value,
    payload_text: &str,
    slack: &SlackHeaders,
) -> Response {
    let callback_id = payload
        .get("view")
        .and_then(|v| v.get("callback_id"))
        .and_then(Value::as_str)
        .unwrap_or("");
    info!(callback_id = %callback_id, "Forwarding view submission");

    let call = state.backend().submission_call(payload_text, slack);
    match state.backend().execute(&call).await {
        Ok(resp) if resp.is_success() => {
            let body = helpers::normalize_submission_body(&resp.body).to_string();
            helpers::relay_json(200, body)
        }
        Ok(resp) => {
            error!("Submission forward returned HTTP {}", resp.status);
            helpers::ok_empty()
        }
        Err(e) => {
            error!("Submission forward failed: {}", e);
            helpers::ok_empty()
        }
    }
}

/// Acknowledge a `block_actions` payload immediately and run the forward in
/// the background.
///
/// The ack window for block actions is three seconds and the follow-up
/// channel is the payload's single-use `response_url`, so nothing downstream
/// is awaited here. The spawned task lands on the deferred tracker, which
/// `main` drains during shutdown.
pub fn handle_block_actions(
    state: &AppState,
    payload: &Value,
    raw_body: &str,
    slack: &SlackHeaders,
) -> Response {
    let response_url = payload
        .get("response_url")
        .and_then(Value::as_str)
        .map(ToString::to_string);

    let correlation_id = Uuid::new_v4().to_string();
    info!(correlation_id = %correlation_id, "Deferring block action forward");

    let call = state.backend().webhook_call(raw_body, slack);
    let task_state = state.clone();
    let task_id = correlation_id.clone();
    state.deferred_tasks().spawn(async move {
        deferred_forward(&task_state, &call, response_url.as_deref(), &task_id).await;
    });

    helpers::ok_empty()
}

/// The deferred half of a block action: forward to the webhook RPC, then
/// post the parsed result to the callback URL. Every failure is logged and
/// swallowed; the ack already went out.
async fn deferred_forward(
    state: &AppState,
    call: &backend::DownstreamCall,
    response_url: Option<&str>,
    correlation_id: &str,
) {
    let resp = match state.backend().execute(call).await {
        Ok(resp) => resp,
        Err(e) => {
            error!(correlation_id = %correlation_id, "Deferred forward failed: {}", e);
            return;
        }
    };

    if !resp.is_success() {
        error!(
            correlation_id = %correlation_id,
            "Deferred forward returned HTTP {}",
            resp.status
        );
        return;
    }

    let Some(url) = response_url else {
        warn!(
            correlation_id = %correlation_id,
            "Payload carried no response_url; dropping backend result"
        );
        return;
    };

    let parsed: Value = match serde_json::from_str(&resp.body) {
        Ok(v) => v,
        Err(e) => {
            error!(
                correlation_id = %correlation_id,
                "Backend result was not valid JSON: {}",
                e
            );
            return;
        }
    };

    match backend::post_callback(url, &parsed).await {
        Ok(()) => info!(correlation_id = %correlation_id, "Posted follow-up to response_url"),
        Err(e) => error!(correlation_id = %correlation_id, "{}", e),
    }
}
