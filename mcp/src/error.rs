use error_stack::Report;
use rmcp::ErrorData as McpError;
use serde_json::json;
use thiserror::Error;

use crate::field_extraction::ParameterKind;

// Error message prefixes
const MSG_FAILED_TO_PREFIX: &str = "failed to";

/// Result type for the `github_mcp` server
pub type Result<T> = std::result::Result<T, Report<Error>>;

/// Error categories surfaced by tool handlers and the server plumbing.
///
/// The first three variants are request validation failures. They are always
/// detected before any remote call and reported back to the caller as a tool
/// error result. Everything else is propagated as a protocol error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    #[error("parameter {name} is not of type {expected}, is {found}")]
    WrongType {
        name:     String,
        expected: ParameterKind,
        found:    &'static str,
    },

    #[error("parameter {name} is out of range: {reason}")]
    OutOfRange { name: String, reason: String },

    #[error("{0}")]
    Upstream(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    // Builder methods for common patterns

    /// Create a "missing required parameter" error
    pub fn missing(name: &str) -> Self {
        Self::MissingParameter(name.to_string())
    }

    /// Create a kind mismatch error
    pub fn wrong_type(name: &str, expected: ParameterKind, found: &'static str) -> Self {
        Self::WrongType {
            name: name.to_string(),
            expected,
            found,
        }
    }

    /// Create a bound violation error
    pub fn out_of_range(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::OutOfRange {
            name:   name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a "failed to X" error for remote calls
    pub fn upstream(action: &str, details: impl std::fmt::Display) -> Self {
        Self::Upstream(format!("{MSG_FAILED_TO_PREFIX} {action}: {details}"))
    }

    /// Whether this error describes a malformed request rather than a server-side fault
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::WrongType { .. } | Self::OutOfRange { .. }
        )
    }
}

/// Convert an error report into the protocol error returned to the MCP client.
///
/// Attachments on the report are carried in the error's `data` field so the
/// client sees the same context that lands in the trace log.
pub fn report_to_mcp_error(report: &Report<Error>) -> McpError {
    let error = report.current_context();
    let message = error.to_string();
    let attachments: Vec<String> = report
        .frames()
        .filter_map(|frame| frame.downcast_ref::<String>().cloned())
        .collect();
    let data = if attachments.is_empty() {
        None
    } else {
        Some(json!({ "context": attachments }))
    };

    if error.is_validation() {
        McpError::invalid_params(message, data)
    } else {
        McpError::internal_error(message, data)
    }
}
