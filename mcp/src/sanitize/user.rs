//! Identity summaries for user search.
//!
//! Narrower than the repository owner projection: a user search result is a
//! consumer-facing identity card, so it carries the profile and avatar links
//! and nothing structural.

use serde::{Deserialize, Serialize};

use crate::github::types::{User, UserSearchResult};

/// Login, id, and the two links a person would follow
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MinimalUser {
    pub login:       String,
    #[serde(skip_serializing_if = "is_zero")]
    pub id:          i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar_url:  String,
}

/// User search page; counts are always present
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MinimalSearchUsersResult {
    pub total_count:        i64,
    pub incomplete_results: bool,
    pub items:              Vec<Option<MinimalUser>>,
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip_serializing_if passes a reference"
)]
const fn is_zero(id: &i64) -> bool {
    *id == 0
}

/// Reduce a user to login, id, profile URL and avatar URL
pub fn minimal_user(user: &User) -> MinimalUser {
    MinimalUser {
        login:       user.login.clone().unwrap_or_default(),
        id:          user.id.unwrap_or_default(),
        profile_url: user.html_url.clone().unwrap_or_default(),
        avatar_url:  user.avatar_url.clone().unwrap_or_default(),
    }
}

/// Summarize a user search page, preserving order and null entries
pub fn minimal_user_search_result(result: &UserSearchResult) -> MinimalSearchUsersResult {
    MinimalSearchUsersResult {
        total_count:        result.total_count.unwrap_or_default(),
        incomplete_results: result.incomplete_results.unwrap_or_default(),
        items:              result
            .items
            .iter()
            .flatten()
            .map(|user| user.as_ref().map(minimal_user))
            .collect(),
    }
}
