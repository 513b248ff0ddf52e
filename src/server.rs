//! MCP server implementation.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
};
use serde_json::Value;

use crate::client::HubClient;
use crate::config::Config;
use crate::tools::{self, handle_search};
use crate::types::{HubError, Result};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// MCP Hub search server.
#[derive(Clone)]
pub struct Server {
    client: HubClient,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Server {
    /// Create a server that searches with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let client = HubClient::new(&config)?;
        tracing::info!("Using MCP Hub endpoint: {}", client.search_url());
        Ok(Self { client })
    }

    /// Tools advertised by this server.
    pub fn tools(&self) -> Vec<Tool> {
        tools::list_tools()
    }

    /// Dispatch a tool call by name.
    ///
    /// Public wrapper around the `tools/call` handler (for testing).
    pub async fn call(
        &self,
        name: &str,
        arguments: Value,
    ) -> std::result::Result<CallToolResult, McpError> {
        if !tools::is_known_tool(name) {
            return Err(HubError::UnknownTool(name.to_string()).to_mcp_error());
        }
        handle_search(&self.client, &arguments).await
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations: Server Handler
//--------------------------------------------------------------------------------------------------

impl ServerHandler for Server {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: None,
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<ListToolsResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.tools())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = std::result::Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let arguments = request.arguments.map(Value::Object).unwrap_or(Value::Null);

            self.call(&request.name, arguments).await.inspect_err(|e| {
                tracing::warn!(
                    tool = %request.name,
                    code = e.code.0,
                    "[MCP Error] {}",
                    e.message
                );
            })
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
