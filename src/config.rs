//! Configuration for the MCP Hub search server.

use std::env;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::types::{HubError, Result};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Environment variable holding the MCP Hub API key.
pub const API_KEY_ENV: &str = "MCP_HUB_API_KEY";

/// Base URL of the MCP Hub open API.
pub const DEFAULT_BASE_URL: &str = "https://www.aimcp.info";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Process-wide configuration, read once at startup.
#[derive(Debug)]
pub struct Config {
    /// Bearer token sent with every search request.
    api_key: SecretString,

    /// Base URL the search path is resolved against.
    base_url: Url,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Config {
    /// Create a configuration for the given API key and the default base URL.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key: String = api_key.into();
        if api_key.is_empty() {
            return Err(HubError::MissingApiKey(API_KEY_ENV));
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| HubError::InvalidBaseUrl(e.to_string()))?,
        })
    }

    /// Load the configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| HubError::MissingApiKey(API_KEY_ENV))?;
        Self::new(api_key)
    }

    /// Point the server at a different MCP Hub deployment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url =
            Url::parse(base_url).map_err(|e| HubError::InvalidBaseUrl(e.to_string()))?;
        Ok(self)
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
