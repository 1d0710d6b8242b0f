//! Tool definition and the result boundary of a tool call

use std::sync::Arc;

use rmcp::ErrorData;
use rmcp::model::{CallToolRequestParams, CallToolResult, Content, Tool};

use super::HandlerContext;
use super::annotations::Annotation;
use super::parameters::ParameterBuilder;
use super::tool_name::ToolName;
use super::types::{ToolFn, ToolOutput};
use crate::error::{Result, report_to_mcp_error};
use crate::github::GitHubApi;

/// A registered tool: its name, annotations, handler and input schema
#[derive(Clone)]
pub struct ToolDef {
    pub tool_name:   ToolName,
    pub annotations: Annotation,
    pub handler:     Arc<dyn ToolFn>,
    /// Builds the input schema advertised to clients
    pub parameters:  fn() -> ParameterBuilder,
}

impl ToolDef {
    pub fn name(&self) -> &'static str {
        self.tool_name.into()
    }

    pub fn is_read_only(&self) -> bool {
        self.annotations.is_read_only()
    }

    pub async fn call_tool(
        &self,
        request: CallToolRequestParams,
        client: Arc<dyn GitHubApi>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        tracing::debug!(tool = self.name(), "calling tool");
        let ctx = HandlerContext::new(request.arguments, client);
        into_call_result(self.name(), self.handler.call(&ctx).await)
    }

    /// Convert to MCP Tool for registration
    pub fn to_tool(&self) -> Tool {
        let mut annotations = self.annotations.clone();
        annotations.title = format!("{}: {}", annotations.category.as_ref(), annotations.title);

        let mut tool = Tool::new(
            self.name(),
            self.tool_name.description(),
            (self.parameters)().build(),
        );
        tool.title = Some(self.annotations.title.clone());
        tool.annotations = Some(annotations.into());
        tool
    }
}

/// Validation failures become tool-level errors the agent can read and fix;
/// anything else is a protocol error.
fn into_call_result(
    tool: &str,
    outcome: Result<ToolOutput>,
) -> std::result::Result<CallToolResult, ErrorData> {
    match outcome {
        Ok(output) => Ok(CallToolResult::success(vec![Content::text(
            output.into_text(),
        )])),
        Err(report) if report.current_context().is_validation() => {
            tracing::debug!(tool, error = %report.current_context(), "rejected tool arguments");
            Ok(CallToolResult::error(vec![Content::text(
                report.current_context().to_string(),
            )]))
        },
        Err(report) => {
            tracing::warn!(tool, error = ?report, "tool call failed");
            Err(report_to_mcp_error(&report))
        },
    }
}
