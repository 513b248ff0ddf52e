use anyhow::Result;
use mcp_hub_search_server::{Config, Server};
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging to stderr only (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    let server = Server::new(config)?;

    // The signal races the handshake as well as the session, so an interrupt
    // before `initialize` also stops the server.
    let interrupted = tokio::select! {
        result = run_server(server) => {
            result?;
            false
        }
        _ = tokio::signal::ctrl_c() => true,
    };

    if interrupted {
        // The running service was dropped with the select, which cancels the transport.
        // Exit directly: the runtime would otherwise wait on the blocking stdin reader
        // until the client closes stdin.
        tracing::info!("Received shutdown signal, MCP Hub Search Server stopped");
        std::process::exit(0);
    }

    tracing::info!("MCP Hub Search Server stopped");
    Ok(())
}

async fn run_server(server: Server) -> Result<()> {
    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("Failed to start MCP server: {}", e))?;
    tracing::info!("MCP Hub Search Server running on stdio");

    service.waiting().await?;
    Ok(())
}
