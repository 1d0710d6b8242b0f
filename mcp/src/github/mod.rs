//! GitHub REST access: wire models, the client seam, and its HTTP implementation.

mod api;
mod client;
pub mod types;

pub use api::GitHubApi;
pub use client::GitHubClient;
