//! MCP Hub Search Server
//!
//! An MCP server exposing a single tool, `search_mcp_hub`, that forwards a
//! keyword query to the MCP Hub open API and returns the JSON response.
//!
//! # Errors
//!
//! Unknown tools and malformed arguments are rejected as protocol errors
//! before any request is sent. Failures of the remote search itself are
//! returned as tool results flagged with `is_error`.

pub mod client;
pub mod config;
pub mod server;
pub mod tools;
pub mod types;

pub use client::HubClient;
pub use config::Config;
pub use server::Server;
pub use tools::{SEARCH_TOOL_NAME, SearchInput, is_valid_search_args};
pub use types::{HubError, Result};
