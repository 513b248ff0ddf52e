//! HTTP client for the MCP Hub open API.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::types::{HubError, Result};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Path of the search endpoint, relative to the base URL.
pub const SEARCH_PATH: &str = "/api/open/v1/search";

/// User-Agent header for requests.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Client for the MCP Hub search endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HubClient {
    client: reqwest::Client,
    search_url: Url,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl HubClient {
    /// Build a client that authenticates every request with the configured API key.
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|_| HubError::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| HubError::Client(e.to_string()))?;

        let search_url = config
            .base_url()
            .join(SEARCH_PATH)
            .map_err(|e| HubError::InvalidBaseUrl(e.to_string()))?;

        Ok(Self { client, search_url })
    }

    /// Get the fully resolved search URL.
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Run one search against the MCP Hub and return the raw JSON body.
    ///
    /// Makes exactly one request. Non-2xx responses become [`HubError::Http`],
    /// carrying the server's `error` message when the body has one.
    pub async fn search(&self, keywords: &str) -> Result<Value> {
        tracing::debug!(keywords, url = %self.search_url, "Searching MCP Hub");

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("keywords", keywords)])
            .send()
            .await
            .map_err(|e| HubError::RequestFailed(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "MCP Hub responded");

        if !status.is_success() {
            let fallback = response
                .error_for_status_ref()
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| status.to_string());
            let body = response.bytes().await.unwrap_or_default();

            return Err(HubError::Http {
                status: status.as_u16(),
                message: server_error_message(&body).unwrap_or(fallback),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HubError::RequestFailed(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| HubError::Decode(e.to_string()))
    }
}

//--------------------------------------------------------------------------------------------------
// Functions: Helpers
//--------------------------------------------------------------------------------------------------

/// Extract the `error` field from a JSON error body.
fn server_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("error")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
