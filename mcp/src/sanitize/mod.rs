//! Response sanitization.
//!
//! Each function projects one raw API entity into a small, stable shape for
//! the consumer. Navigation URLs are dropped except where an entity's purpose
//! is navigation. Nested entities are cleaned recursively, absent ones stay
//! absent, and nothing here can fail.

mod content;
mod decode;
mod repository;
mod search;
mod user;

/// Lists that are absent or empty are left out of the output
#[allow(clippy::ref_option, reason = "serde skip_serializing_if passes a reference")]
fn absent_or_empty<T>(list: &Option<Vec<T>>) -> bool {
    list.as_ref().is_none_or(Vec::is_empty)
}

pub use content::{clean_repository_content, clean_repository_content_list};
pub use repository::clean_repository_search_result;
pub use search::clean_code_search_result;
pub use user::minimal_user_search_result;
