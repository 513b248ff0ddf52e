//! search_mcp_hub tool implementation.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::HubClient;
use crate::types::{HubError, Result};

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Name of the search tool.
pub const SEARCH_TOOL_NAME: &str = "search_mcp_hub";

const SEARCH_TOOL_DESCRIPTION: &str = "Search for MCPs on the MCP Hub";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Input for the search tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Keywords to search for MCPs
    pub keywords: String,
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Tool definition advertised in `tools/list`.
pub fn search_tool() -> Tool {
    Tool::new(SEARCH_TOOL_NAME, SEARCH_TOOL_DESCRIPTION, input_schema())
}

fn input_schema() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(SearchInput);
    match schema.as_object() {
        Some(object) => Arc::new(object.clone()),
        None => {
            tracing::error!("Input schema for {} is not an object", SEARCH_TOOL_NAME);
            Arc::new(JsonObject::new())
        }
    }
}

/// Check that `args` is an object whose `keywords` field is a string.
pub fn is_valid_search_args(args: &Value) -> bool {
    args.as_object()
        .and_then(|obj| obj.get("keywords"))
        .is_some_and(Value::is_string)
}

/// Validate and decode the search tool's arguments.
pub fn parse_search_args(args: &Value) -> Result<SearchInput> {
    if !is_valid_search_args(args) {
        return Err(HubError::InvalidArguments);
    }
    serde_json::from_value(args.clone()).map_err(|_| HubError::InvalidArguments)
}

/// Run the search tool.
///
/// Malformed arguments are rejected as a protocol error before any request is
/// made. Remote failures are returned as an error result, not as `Err`.
pub async fn handle_search(
    client: &HubClient,
    args: &Value,
) -> std::result::Result<CallToolResult, McpError> {
    let input = parse_search_args(args).map_err(|e| e.to_mcp_error())?;

    match client.search(&input.keywords).await {
        Ok(body) => {
            let text = serde_json::to_string_pretty(&body)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(e) => {
            tracing::warn!(code = e.code(), error = %e, "MCP Hub search failed");
            Ok(CallToolResult::error(vec![Content::text(e.remote_message())]))
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
