use std::sync::Arc;

use rmcp::model::JsonObject;

use crate::field_extraction::Arguments;
use crate::github::GitHubApi;

/// Everything a handler sees for one tool call
#[derive(Clone)]
pub struct HandlerContext {
    arguments: JsonObject,
    client:    Arc<dyn GitHubApi>,
}

impl HandlerContext {
    pub fn new(arguments: Option<JsonObject>, client: Arc<dyn GitHubApi>) -> Self {
        Self {
            arguments: arguments.unwrap_or_default(),
            client,
        }
    }

    /// Typed view over the call's arguments
    pub const fn arguments(&self) -> Arguments<'_> {
        Arguments::new(&self.arguments)
    }

    pub fn client(&self) -> &dyn GitHubApi {
        self.client.as_ref()
    }
}
