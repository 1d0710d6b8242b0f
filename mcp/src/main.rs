//! # GitHub MCP Server
//!
//! A Model Context Protocol server that exposes GitHub repository releases,
//! search and contents as tools an agent can call.
//!
//! Tool arguments are validated before any request reaches GitHub, and
//! responses are trimmed to the fields an agent needs.

use std::error::Error;
use std::sync::Arc;

use config::ServerConfig;
use github::GitHubClient;
use mcp_service::McpService;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use support::TracingLevel;

mod config;
mod constants;
mod error;
mod field_extraction;
mod github;
mod mcp_service;
mod sanitize;
mod support;
mod tool;
mod tools;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env().map_err(|report| format!("{report:?}"))?;

    // stdout carries the protocol, so traces only go to the log file
    TracingLevel::init_file_tracing(&config.log_file, config.log_level);
    tracing::info!(
        api = %config.api_base_url,
        read_only = config.read_only,
        level = TracingLevel::current().as_str(),
        "starting GitHub MCP server"
    );

    let client = GitHubClient::new(&config).map_err(|report| format!("{report:?}"))?;
    let service = McpService::new(Arc::new(client), config.read_only);

    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    Ok(())
}
