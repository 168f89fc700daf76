use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{SlackError, METHOD_CONVERSATIONS_LIST, METHOD_USERS_LIST};
use crate::config::Config;
use crate::credentials::ApiKey;
use crate::types::*;

/// True when the response carries a cursor for a further page
fn has_more_pages(metadata: Option<&ResponseMetadata>) -> bool {
    metadata
        .and_then(|m| m.next_cursor.as_deref())
        .is_some_and(|c| !c.is_empty())
}

/// Slack Web API client
pub struct SlackClient {
    http: Client,
    base_url: String,
    token: Option<ApiKey>,
}

impl SlackClient {
    /// Create a new client. Without a token requests go out unauthenticated.
    pub fn new(config: &Config, token: Option<ApiKey>) -> Result<Self, SlackError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Check if a token was supplied
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn headers(&self) -> Result<HeaderMap, SlackError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token.as_str()))?,
            );
        }
        Ok(headers)
    }

    /// Call a read-only Web API method and decode its payload
    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, SlackError> {
        let url = format!("{}/{}", self.base_url, method);
        tracing::debug!("GET {}", url);

        let res = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .query(query)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(SlackError::Status {
                method,
                status,
                body,
            });
        }

        let api_status: ApiStatus = serde_json::from_str(&body)
            .map_err(|source| SlackError::Decode { method, source })?;
        if !api_status.ok {
            return Err(SlackError::Api {
                method,
                error: api_status
                    .error
                    .unwrap_or_else(|| "unknown_error".to_string()),
            });
        }
        if let Some(warning) = api_status.warning {
            tracing::warn!("{} warning: {}", method, warning);
        }

        serde_json::from_str(&body).map_err(|source| SlackError::Decode { method, source })
    }

    /// List every member of the workspace in a single request
    pub async fn list_users(&self) -> Result<Vec<Member>, SlackError> {
        let list: UsersList = self.call(METHOD_USERS_LIST, &[]).await?;

        if has_more_pages(list.response_metadata.as_ref()) {
            tracing::debug!("users.list has further pages; only the first is exported");
        }

        Ok(list.members)
    }

    /// List public and private channels visible to the token
    pub async fn list_channels(&self) -> Result<Vec<Channel>, SlackError> {
        let list: ChannelsList = self
            .call(
                METHOD_CONVERSATIONS_LIST,
                &[
                    ("types", "public_channel,private_channel"),
                    ("exclude_archived", "true"),
                ],
            )
            .await?;

        if has_more_pages(list.response_metadata.as_ref()) {
            tracing::debug!("conversations.list has further pages; only the first is listed");
        }

        Ok(list.channels)
    }
}
