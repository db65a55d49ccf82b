//! Slack Web API client.
//!
//! The relay talks to exactly one Web API method, `views.open`. The API base
//! URL is injectable so tests can point the client at a local stub server.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use crate::errors::RelayError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Envelope every Slack Web API method answers with.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    error: Option<String>,
}

/// Build the JSON payload for `views.open`.
#[must_use]
pub fn build_views_open_payload(trigger_id: &str, view: &Value) -> Value {
    json!({
        "trigger_id": trigger_id,
        "view": view
    })
}

/// Minimal Slack Web API client holding the bot token.
pub struct SlackClient {
    api_base: String,
    bot_token: String,
}

impl SlackClient {
    #[must_use]
    pub fn new(api_base: &str, bot_token: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
        }
    }

    /// Open a modal view against a short-lived `trigger_id` via `views.open`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, Slack responds with a
    /// non-success status, or the response envelope carries `ok: false`.
    pub async fn open_view(&self, trigger_id: &str, view: &Value) -> Result<(), RelayError> {
        let payload = build_views_open_payload(trigger_id, view);

        let resp = HTTP_CLIENT
            .post(format!("{}/views.open", self.api_base))
            .bearer_auth(&self.bot_token)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RelayError::SlackApiError(format!(
                "views.open HTTP {}",
                resp.status()
            )));
        }

        let envelope: ApiEnvelope = resp.json().await?;
        if envelope.ok {
            Ok(())
        } else {
            Err(RelayError::SlackApiError(format!(
                "views.open error: {}",
                envelope.error.as_deref().unwrap_or("unknown")
            )))
        }
    }
}
