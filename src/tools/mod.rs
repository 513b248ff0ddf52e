//! MCP tool registry.

mod search;

use rmcp::model::Tool;

pub use search::{
    SEARCH_TOOL_NAME, SearchInput, handle_search, is_valid_search_args, parse_search_args,
    search_tool,
};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// All tools advertised by the server.
pub fn list_tools() -> Vec<Tool> {
    vec![search_tool()]
}

/// Whether `name` is a tool this server provides.
pub fn is_known_tool(name: &str) -> bool {
    name == SEARCH_TOOL_NAME
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
