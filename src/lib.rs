//! Relay between Slack interactions and the capacity-request backend.
//!
//! The relay accepts Slack's webhook POSTs, classifies each body into one of
//! four interaction kinds, and forwards to a PostgREST backend that owns all
//! business logic:
//!
//! 1. An argument-less slash command (or the bare `create` keyword) opens
//!    the capacity-request modal via `views.open` before acknowledging.
//! 2. A modal submission is forwarded to the submission RPC and the
//!    response relayed back for Slack to interpret.
//! 3. A button click is acknowledged immediately; the forward and the
//!    follow-up POST to the payload's `response_url` run in the background.
//! 4. Anything else is forwarded verbatim to the webhook RPC.
//!
//! A second route proxies provisioning-system callbacks to their own RPC.
//! The backend treats every forwarded body as a single opaque text argument,
//! so the relay rewrites the content type to `text/plain` on the way
//! through and never interprets business data itself.
//!
//! # Example
//!
//! ```no_run
//! use capreq_relay::core::config::AppConfig;
//! use capreq_relay::state::AppState;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     capreq_relay::setup_logging();
//!
//!     let config = AppConfig {
//!         postgrest_url: "https://db.example.com/rest/v1".to_string(),
//!         service_role_key: "service-key".to_string(),
//!         slack_bot_token: Some("xoxb-token".to_string()),
//!         slack_api_base: "https://slack.com/api".to_string(),
//!         host: "127.0.0.1".to_string(),
//!         port: 8080,
//!     };
//!
//!     let state = AppState::new(config);
//!     let app = capreq_relay::api::router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod backend;
pub mod core;
pub mod errors;
pub mod slack;
pub mod state;

/// Configure structured logging for the relay process.
///
/// Respects `RUST_LOG` when set; otherwise defaults to info-level output for
/// this crate plus tower-http's request traces.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "capreq_relay=info,tower_http=info".into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
