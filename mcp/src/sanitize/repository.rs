//! Repository projections used by search results.

use serde::{Deserialize, Serialize};

use crate::github::types::{Repository, RepositorySearchResult, User};

/// Repository owner reduced to structural identity
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CleanedUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id:    Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind:  Option<String>,
}

/// Repository summary that keeps a single browse URL
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CleanedRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id:        Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner:     Option<CleanedUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private:   Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork:      Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url:  Option<String>,
}

/// Repository search page with cleaned items
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CleanedRepositorySearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count:        Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incomplete_results: Option<bool>,
    #[serde(skip_serializing_if = "super::absent_or_empty")]
    pub items:              Option<Vec<Option<CleanedRepository>>>,
}

/// Reduce an owner to login, id and account type
pub fn clean_user(user: &User) -> CleanedUser {
    CleanedUser {
        login: user.login.clone(),
        id:    user.id,
        kind:  user.kind.clone(),
    }
}

/// Reduce a repository to identity, owner, visibility and its `html_url`
pub fn clean_repository_for_search(repo: &Repository) -> CleanedRepository {
    CleanedRepository {
        id:        repo.id,
        name:      repo.name.clone(),
        full_name: repo.full_name.clone(),
        owner:     repo.owner.as_ref().map(clean_user),
        private:   repo.private,
        fork:      repo.fork,
        html_url:  repo.html_url.clone(),
    }
}

/// Clean every repository on a search page, preserving order and null entries
pub fn clean_repository_search_result(
    result: &RepositorySearchResult,
) -> CleanedRepositorySearchResult {
    CleanedRepositorySearchResult {
        total_count:        result.total_count,
        incomplete_results: result.incomplete_results,
        items:              result.items.as_ref().map(|items| {
            items
                .iter()
                .map(|item| item.as_ref().map(clean_repository_for_search))
                .collect()
        }),
    }
}
