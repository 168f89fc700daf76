use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the Slack Web API
#[derive(Debug, Error)]
pub enum SlackError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} returned {status}: {body}")]
    Status {
        method: &'static str,
        status: StatusCode,
        body: String,
    },

    /// `ok: false` in the response body, e.g. `not_authed` or `invalid_auth`
    #[error("{method} failed: {error}")]
    Api { method: &'static str, error: String },

    #[error("failed to parse {method} response: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid API token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

impl SlackError {
    /// True when Slack rejected or did not receive a usable token
    pub fn is_auth(&self) -> bool {
        match self {
            SlackError::Api { error, .. } => matches!(
                error.as_str(),
                "not_authed" | "invalid_auth" | "account_inactive" | "token_revoked"
            ),
            SlackError::Status { status, .. } => *status == StatusCode::UNAUTHORIZED,
            SlackError::InvalidToken(_) => true,
            _ => false,
        }
    }
}
