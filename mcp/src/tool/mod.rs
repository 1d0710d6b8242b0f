mod annotations;
mod handler_context;
mod parameters;
mod tool_def;
mod tool_name;
mod types;

pub use handler_context::HandlerContext;
pub use tool_def::ToolDef;
pub use tool_name::get_all_tool_definitions;
pub use types::{ToolFn, ToolOutput};
