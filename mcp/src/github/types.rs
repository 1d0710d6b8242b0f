//! Wire models for the parts of the GitHub REST API the tools touch.
//!
//! These mirror what the API sends, URL fields included. The sanitizers in
//! [`crate::sanitize`] project them down to what a consumer needs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field_extraction::Pagination;

/// A user or organization account
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct User {
    #[serde(default)]
    pub login:               Option<String>,
    #[serde(default)]
    pub id:                  Option<i64>,
    #[serde(default)]
    pub node_id:             Option<String>,
    #[serde(default, rename = "type")]
    pub kind:                Option<String>,
    #[serde(default)]
    pub site_admin:          Option<bool>,
    #[serde(default)]
    pub avatar_url:          Option<String>,
    #[serde(default)]
    pub html_url:            Option<String>,
    #[serde(default)]
    pub url:                 Option<String>,
    #[serde(default)]
    pub followers_url:       Option<String>,
    #[serde(default)]
    pub repos_url:           Option<String>,
    #[serde(default)]
    pub events_url:          Option<String>,
    #[serde(default)]
    pub received_events_url: Option<String>,
    #[serde(default)]
    pub score:               Option<f64>,
}

/// A repository as returned inside search results
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Repository {
    #[serde(default)]
    pub id:             Option<i64>,
    #[serde(default)]
    pub node_id:        Option<String>,
    #[serde(default)]
    pub name:           Option<String>,
    #[serde(default)]
    pub full_name:      Option<String>,
    #[serde(default)]
    pub owner:          Option<User>,
    #[serde(default)]
    pub private:        Option<bool>,
    #[serde(default)]
    pub fork:           Option<bool>,
    #[serde(default)]
    pub description:    Option<String>,
    #[serde(default)]
    pub html_url:       Option<String>,
    #[serde(default)]
    pub url:            Option<String>,
    #[serde(default)]
    pub git_url:        Option<String>,
    #[serde(default)]
    pub ssh_url:        Option<String>,
    #[serde(default)]
    pub clone_url:      Option<String>,
    #[serde(default)]
    pub svn_url:        Option<String>,
    #[serde(default)]
    pub archive_url:    Option<String>,
    #[serde(default)]
    pub contents_url:   Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
}

/// Navigation links attached to a content entry
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContentLinks {
    #[serde(default)]
    pub git:  Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default, rename = "self")]
    pub own:  Option<String>,
}

/// A file, directory entry, symlink or submodule
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RepositoryContent {
    #[serde(default, rename = "type")]
    pub kind:              Option<String>,
    #[serde(default)]
    pub target:            Option<String>,
    #[serde(default)]
    pub encoding:          Option<String>,
    #[serde(default)]
    pub size:              Option<i64>,
    #[serde(default)]
    pub name:              Option<String>,
    #[serde(default)]
    pub path:              Option<String>,
    #[serde(default)]
    pub content:           Option<String>,
    #[serde(default)]
    pub sha:               Option<String>,
    #[serde(default)]
    pub url:               Option<String>,
    #[serde(default)]
    pub git_url:           Option<String>,
    #[serde(default)]
    pub html_url:          Option<String>,
    #[serde(default)]
    pub download_url:      Option<String>,
    #[serde(default)]
    pub submodule_git_url: Option<String>,
    #[serde(default, rename = "_links")]
    pub links:             Option<ContentLinks>,
}

/// The contents endpoint answers with an object for a file and an array for a directory
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Directory(Vec<Option<RepositoryContent>>),
    File(Box<RepositoryContent>),
}

/// A single highlighted substring inside a text match
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Match {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text:    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices: Option<Vec<i64>>,
}

/// Fragment of a search hit with the positions that matched
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TextMatch {
    #[serde(default)]
    pub object_url:  Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub property:    Option<String>,
    #[serde(default)]
    pub fragment:    Option<String>,
    #[serde(default)]
    pub matches:     Option<Vec<Match>>,
}

/// One hit from code search
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CodeResult {
    #[serde(default)]
    pub name:         Option<String>,
    #[serde(default)]
    pub path:         Option<String>,
    #[serde(default)]
    pub sha:          Option<String>,
    #[serde(default)]
    pub url:          Option<String>,
    #[serde(default)]
    pub git_url:      Option<String>,
    #[serde(default)]
    pub html_url:     Option<String>,
    #[serde(default)]
    pub repository:   Option<Repository>,
    #[serde(default)]
    pub text_matches: Option<Vec<Option<TextMatch>>>,
}

/// Code search response page
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CodeSearchResult {
    #[serde(default)]
    pub total_count:        Option<i64>,
    #[serde(default)]
    pub incomplete_results: Option<bool>,
    #[serde(default)]
    pub items:              Option<Vec<Option<CodeResult>>>,
}

/// Repository search response page
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RepositorySearchResult {
    #[serde(default)]
    pub total_count:        Option<i64>,
    #[serde(default)]
    pub incomplete_results: Option<bool>,
    #[serde(default)]
    pub items:              Option<Vec<Option<Repository>>>,
}

/// User search response page
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserSearchResult {
    #[serde(default)]
    pub total_count:        Option<i64>,
    #[serde(default)]
    pub incomplete_results: Option<bool>,
    #[serde(default)]
    pub items:              Option<Vec<Option<User>>>,
}

/// Payload for creating a release; unset optional fields are not sent
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct NewRelease {
    pub tag_name:                 String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:                     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body:                     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft:                    Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease:               Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_release_notes:   Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_latest:              Option<String>,
}

/// Sparse patch for an existing release.
///
/// Only the fields the caller supplied are serialized, so everything else is
/// left untouched on the server.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ReleasePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name:                 Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:                     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body:                     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft:                    Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease:               Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_latest:              Option<String>,
}

/// Payload for the generate-release-notes endpoint
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct GenerateNotesRequest {
    pub tag_name:          String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish:  Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_tag_name: Option<String>,
}

/// A search request shared by the search endpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub query:      String,
    pub sort:       Option<String>,
    pub order:      Option<String>,
    pub pagination: Pagination,
}

impl SearchQuery {
    /// Query string pairs for the search endpoints
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.query.clone())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(order) = &self.order {
            pairs.push(("order", order.clone()));
        }
        pairs.extend(self.pagination.query_pairs());
        pairs
    }
}

/// A release payload passed through untouched
pub type Release = Value;
