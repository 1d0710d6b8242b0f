//! Typed extraction of tool arguments.
//!
//! This module turns the untyped argument object of a tool call into typed
//! values, including the pagination pair shared by list-style tools.

// Internal modules
mod extraction;
mod pagination;

// Re-export core types and traits for public use
pub use extraction::{Arguments, ParameterKind};
pub use pagination::Pagination;
