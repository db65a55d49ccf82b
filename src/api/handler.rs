//! HTTP surface - thin router that delegates to specialized handlers.
//!
//! Each inbound body is classified exactly once and handed to a branch
//! handler. The plain-forward default lives here because it is the fallback
//! for everything the classifier does not positively match.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method},
    response::Response,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::{helpers, interactive, parsing, provisioning, slash};
use crate::core::models::{Interaction, SlackHeaders};
use crate::state::AppState;

/// Build the relay router.
///
/// The webhook routes accept every method and gate on POST inside the
/// handler, so non-POST callers get the fixed `Method not allowed` body
/// instead of axum's bodyless 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(slack_webhook))
        .route("/provisioning", any(provisioning_webhook))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Slack webhook entrypoint: classify the body and dispatch.
async fn slack_webhook(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Response {
    if method != Method::POST {
        return helpers::method_not_allowed();
    }

    let slack = helpers::slack_headers(&headers);

    match parsing::classify(&body) {
        Interaction::OpenDialog(command) => {
            info!(command = %command.command, "Classified as dialog open");
            slash::handle_dialog_open(&state, &command).await
        }
        Interaction::ViewSubmission { payload, raw } => {
            interactive::handle_view_submission(&state, &payload, &raw, &slack).await
        }
        Interaction::BlockActions { payload } => {
            interactive::handle_block_actions(&state, &payload, &body, &slack)
        }
        Interaction::Forward => handle_forward(&state, &body, &slack).await,
    }
}

/// Provisioning webhook entrypoint.
async fn provisioning_webhook(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Response {
    if method != Method::POST {
        return helpers::method_not_allowed();
    }

    provisioning::handle_provisioning(&state, &headers, &body).await
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

// ============================================================================
// Default Forward
// ============================================================================

/// Forward a body the classifier did not match to the webhook RPC, relaying
/// downstream's status and body unchanged.
///
/// This is the one branch where a downstream error status reaches the
/// caller: a command with arguments is a backend-interpreted sub-command and
/// the backend's response is the reply Slack renders. A transport failure
/// still degrades to the empty ack.
async fn handle_forward(state: &AppState, body: &str, slack: &SlackHeaders) -> Response {
    let call = state.backend().webhook_call(body, slack);

    match state.backend().execute(&call).await {
        Ok(resp) => helpers::relay_json(resp.status, resp.body),
        Err(e) => {
            error!("Webhook forward failed: {}", e);
            helpers::ok_empty()
        }
    }
}
