//! Application state shared across handlers.

use std::sync::Arc;

use tokio_util::task::TaskTracker;

use crate::backend::BackendClient;
use crate::core::config::AppConfig;
use crate::slack::SlackClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the immutable configuration, the two
/// outbound clients, and the tracker that keeps deferred follow-up tasks
/// alive through shutdown.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    backend: BackendClient,
    slack: Option<SlackClient>,
    deferred: TaskTracker,
}

impl AppState {
    /// Create application state from configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let backend = BackendClient::new(&config.postgrest_url, &config.service_role_key);
        let slack = config
            .slack_bot_token
            .as_ref()
            .map(|token| SlackClient::new(&config.slack_api_base, token));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                slack,
                deferred: TaskTracker::new(),
            }),
        }
    }

    /// Get a reference to the relay configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the PostgREST client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get the Slack Web API client, present only when a bot token is
    /// configured.
    #[must_use]
    pub fn slack(&self) -> Option<&SlackClient> {
        self.inner.slack.as_ref()
    }

    /// Tracker for deferred follow-up tasks. Handlers spawn onto it before
    /// acknowledging; `main` closes and awaits it during shutdown so
    /// in-flight forwards complete before the process exits.
    #[must_use]
    pub fn deferred_tasks(&self) -> &TaskTracker {
        &self.inner.deferred
    }
}
