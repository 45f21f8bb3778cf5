use antd_docs::{Config, server::AntDocsMcpServer};
use anyhow::Result;
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::{self, EnvFilter};

/// MCP server for the Ant Design Blazor docs catalog
/// Usage: antd-docs-mcp
#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env()?;
    tracing::info!(catalog = ?config.catalog, "Starting antd-docs MCP server");

    // The catalog is fetched lazily on the first tool call
    let service = AntDocsMcpServer::from_config(&config)?
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    tracing::info!("antd-docs MCP server stopped");
    Ok(())
}
