//! Provisioning-system passthrough.

use axum::http::HeaderMap;
use axum::response::Response;
use tracing::{error, info};

use super::helpers;
use crate::backend::HEADER_PROVISIONING_KEY;
use crate::state::AppState;

/// Forward a provisioning callback to its RPC and relay the downstream body
/// under a fixed 200.
///
/// The provisioning system authenticates with `x-provisioning-api-key`; the
/// relay passes the header through untouched (empty when absent) and leaves
/// it to the backend to honor or reject the request.
pub async fn handle_provisioning(state: &AppState, headers: &HeaderMap, body: &str) -> Response {
    let api_key = helpers::header_or_empty(headers, HEADER_PROVISIONING_KEY);
    let call = state.backend().provisioning_call(body, &api_key);

    match state.backend().execute(&call).await {
        Ok(resp) => {
            info!("Provisioning forward returned HTTP {}", resp.status);
            helpers::relay_json(200, resp.body)
        }
        Err(e) => {
            error!("Provisioning forward failed: {}", e);
            helpers::ok_empty()
        }
    }
}
