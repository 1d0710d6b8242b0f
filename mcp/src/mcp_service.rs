use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

use crate::github::GitHubApi;
use crate::tool::{self, ToolDef};

const INSTRUCTIONS: &str = "Tools for GitHub releases, search and repository contents. \
                            List and search tools accept `page` (from 1) and `perPage` (1 to \
                            100).";

/// MCP service exposing GitHub REST operations as tools.
#[derive(Clone)]
pub struct McpService {
    /// Tool definitions by name
    tool_defs: HashMap<&'static str, ToolDef>,
    /// Pre-converted MCP tools, sorted by name
    tools:     Vec<Tool>,
    client:    Arc<dyn GitHubApi>,
}

impl McpService {
    /// Register every tool, or only the read-only ones
    pub fn new(client: Arc<dyn GitHubApi>, read_only: bool) -> Self {
        let all_defs = tool::get_all_tool_definitions(read_only);
        let mut tools: Vec<_> = all_defs.iter().map(ToolDef::to_tool).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        let tool_defs = all_defs.into_iter().map(|def| (def.name(), def)).collect();

        tracing::info!(tools = tools.len(), read_only, "registered tools");
        Self {
            tool_defs,
            tools,
            client,
        }
    }

    pub fn get_tool_def(&self, name: &str) -> Option<&ToolDef> {
        self.tool_defs.get(name)
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Route a tool call to its handler
    pub async fn dispatch(
        &self,
        request: CallToolRequestParams,
    ) -> Result<CallToolResult, McpError> {
        let Some(tool_def) = self.get_tool_def(&request.name) else {
            tracing::warn!(tool = %request.name, "call to unknown tool");
            return Err(McpError::invalid_params(
                format!("unknown tool: {}", request.name),
                None,
            ));
        };

        tool_def.call_tool(request, Arc::clone(&self.client)).await
    }
}

impl ServerHandler for McpService {
    #[allow(
        clippy::field_reassign_with_default,
        reason = "rmcp model structs are non-exhaustive"
    )]
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools().to_vec()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(request).await
    }
}
