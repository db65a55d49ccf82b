use std::env;

use url::Url;

/// Default base URL for the Slack Web API. Overridable via `SLACK_API_BASE`
/// so tests can point `views.open` at a local stub.
pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";

/// Immutable process configuration, read once at startup and injected into
/// the dispatcher. Nothing here changes for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgREST base URL (e.g. `https://example.supabase.co/rest/v1`),
    /// normalized without a trailing slash.
    pub postgrest_url: String,
    /// Service-role key, sent as both `apikey` and bearer credential.
    pub service_role_key: String,
    /// Bot token for the dialog-open API. Optional: without it the
    /// dialog-open path degrades to a plain acknowledgment.
    pub slack_bot_token: Option<String>,
    pub slack_api_base: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let postgrest_url = env::var("POSTGREST_URL").map_err(|e| format!("POSTGREST_URL: {}", e))?;
        let postgrest_url = Url::parse(&postgrest_url)
            .map_err(|e| format!("POSTGREST_URL: {}", e))?
            .to_string()
            .trim_end_matches('/')
            .to_string();

        let port = match env::var("RELAY_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| format!("RELAY_PORT: {}", e))?,
            Err(_) => 8080,
        };

        Ok(Self {
            postgrest_url,
            service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY")
                .map_err(|e| format!("SUPABASE_SERVICE_ROLE_KEY: {}", e))?,
            slack_bot_token: env::var("SLACK_BOT_TOKEN").ok().filter(|t| !t.is_empty()),
            slack_api_base: env::var("SLACK_API_BASE")
                .unwrap_or_else(|_| DEFAULT_SLACK_API_BASE.to_string()),
            host: env::var("RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
