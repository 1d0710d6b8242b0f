use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::HandlerContext;
use crate::error::{Error, Result};

/// What a successful tool call hands back to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutput {
    /// Serialized as compact JSON text
    Json(Value),
    /// Sent as-is
    Message(String),
}

impl ToolOutput {
    /// Serialize any response shape into a JSON output
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value).map(Self::Json).map_err(|e| {
            error_stack::Report::new(Error::Serialization(e.to_string()))
                .attach("Failed to serialize tool response".to_string())
        })
    }

    /// The text content returned to the client
    pub fn into_text(self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Message(message) => message,
        }
    }
}

/// A single tool's behavior.
///
/// Implementations extract and validate every argument before touching the
/// client, so a validation failure never causes a remote call.
/// `#[async_trait]` keeps the trait usable as `Arc<dyn ToolFn>`.
#[async_trait]
pub trait ToolFn: Send + Sync {
    async fn call(&self, ctx: &HandlerContext) -> Result<ToolOutput>;
}
