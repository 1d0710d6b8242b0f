use async_trait::async_trait;

use super::types::{
    CodeSearchResult, ContentsResponse, GenerateNotesRequest, NewRelease, Release, ReleasePatch,
    RepositorySearchResult, SearchQuery, UserSearchResult,
};
use crate::error::Result;
use crate::field_extraction::Pagination;

/// The remote operations the tools are built on.
///
/// Every method is a single REST call. Failures come back as
/// `Error::Upstream` so they stay distinguishable from request validation.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        pagination: Pagination,
    ) -> Result<Vec<Release>>;

    async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Release>;

    async fn get_release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Release>;

    async fn get_release(&self, owner: &str, repo: &str, release_id: i64) -> Result<Release>;

    async fn create_release(&self, owner: &str, repo: &str, release: &NewRelease)
    -> Result<Release>;

    async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
        patch: &ReleasePatch,
    ) -> Result<Release>;

    async fn delete_release(&self, owner: &str, repo: &str, release_id: i64) -> Result<()>;

    async fn generate_release_notes(
        &self,
        owner: &str,
        repo: &str,
        request: &GenerateNotesRequest,
    ) -> Result<Release>;

    async fn search_repositories(&self, query: &SearchQuery) -> Result<RepositorySearchResult>;

    async fn search_code(&self, query: &SearchQuery) -> Result<CodeSearchResult>;

    async fn search_users(&self, query: &SearchQuery) -> Result<UserSearchResult>;

    async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<ContentsResponse>;
}
