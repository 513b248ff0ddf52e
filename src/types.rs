//! Shared error definitions for the MCP Hub search server.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use serde_json::json;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Prefix of every in-band error message produced by a failed remote search.
pub const REMOTE_ERROR_PREFIX: &str = "remote search error";

//--------------------------------------------------------------------------------------------------
// Types: Error
//--------------------------------------------------------------------------------------------------

/// MCP Hub search server error types.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("{0} environment variable is required")]
    MissingApiKey(&'static str),

    #[error("API key cannot be used as a header value")]
    InvalidApiKey,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid search arguments. Requires \"keywords\" (string).")]
    InvalidArguments,

    #[error("{status} {message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    RequestFailed(String),

    #[error("{0}")]
    Decode(String),
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl HubError {
    /// Get the error code for this error variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey(_) => "MISSING_API_KEY",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::InvalidBaseUrl(_) => "INVALID_BASE_URL",
            Self::Client(_) => "CLIENT_ERROR",
            Self::UnknownTool(_) => "UNKNOWN_TOOL",
            Self::InvalidArguments => "INVALID_ARGUMENTS",
            Self::Http { .. } => "HTTP_ERROR",
            Self::RequestFailed(_) => "REQUEST_FAILED",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Message shown to the caller when a remote search fails.
    pub fn remote_message(&self) -> String {
        format!("{}: {}", REMOTE_ERROR_PREFIX, self)
    }

    /// Convert to MCP error with structured data.
    ///
    /// Unknown tools map to `method not found`; everything else is reported as
    /// `invalid params`.
    pub fn to_mcp_error(&self) -> McpError {
        let data = Some(json!({ "code": self.code() }));
        match self {
            Self::UnknownTool(_) => {
                McpError::new(ErrorCode::METHOD_NOT_FOUND, self.to_string(), data)
            }
            _ => McpError::invalid_params(self.to_string(), data),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Types: Common
//--------------------------------------------------------------------------------------------------

/// Result type for MCP Hub operations.
pub type Result<T> = std::result::Result<T, HubError>;

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
