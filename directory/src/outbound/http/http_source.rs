//! Reqwest-backed user collection adapter.
//!
//! This adapter owns transport details only: the `GET` request, timeout and
//! HTTP status mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{UserDto, into_domain_records};
use crate::domain::UserRecord;
use crate::domain::ports::{UserCollectionSource, UserCollectionSourceError};

const DEFAULT_USER_AGENT: &str = "user-directory/0.1";

/// Outbound identity sent with collection requests.
pub struct HttpSourceIdentity {
    /// HTTP user-agent header value.
    pub user_agent: String,
}

impl Default for HttpSourceIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// User collection source that performs one `GET` against a fixed endpoint.
pub struct HttpUserCollectionSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl HttpUserCollectionSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let source = HttpUserCollectionSource::new(endpoint, Duration::from_secs(10));
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, HttpSourceIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: HttpSourceIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
        })
    }

    /// Endpoint this adapter fetches from.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserCollectionSource for HttpUserCollectionSource {
    async fn fetch_collection(&self) -> Result<Vec<UserRecord>, UserCollectionSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_records(body.as_ref())
    }
}

fn parse_records(body: &[u8]) -> Result<Vec<UserRecord>, UserCollectionSourceError> {
    let decoded: Vec<UserDto> = serde_json::from_slice(body).map_err(|error| {
        UserCollectionSourceError::decode(format!("invalid user collection JSON: {error}"))
    })?;
    into_domain_records(decoded).map_err(UserCollectionSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserCollectionSourceError {
    if error.is_timeout() {
        UserCollectionSourceError::timeout(error.to_string())
    } else {
        UserCollectionSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserCollectionSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        body_preview
    };
    UserCollectionSourceError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
