use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Failed to parse webhook body: {0}")]
    ParseError(String),

    #[error("Failed to access Slack API: {0}")]
    SlackApiError(String),

    #[error("Callback delivery failed: {0}")]
    CallbackError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::HttpError(error.to_string())
    }
}
