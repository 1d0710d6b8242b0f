//! Recording stand-in for the GitHub client used by handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use error_stack::Report;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::field_extraction::Pagination;
use crate::github::GitHubApi;
use crate::github::types::{
    CodeSearchResult, ContentsResponse, GenerateNotesRequest, NewRelease, Release, ReleasePatch,
    RepositorySearchResult, SearchQuery, UserSearchResult,
};
use crate::tool::HandlerContext;

/// Answers every call with one canned JSON document and records what was asked
#[derive(Default)]
pub struct RecordingApi {
    response: Value,
    failure:  Option<String>,
    calls:    Mutex<Vec<(&'static str, Value)>>,
}

impl RecordingApi {
    pub fn responding(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            ..Self::default()
        })
    }

    pub fn failing(details: &str) -> Arc<Self> {
        Arc::new(Self {
            failure: Some(details.to_string()),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<(&'static str, Value)> {
        self.calls.lock().unwrap().clone()
    }

    fn record<T: DeserializeOwned>(&self, method: &'static str, request: Value) -> Result<T> {
        self.calls.lock().unwrap().push((method, request));
        if let Some(details) = &self.failure {
            return Err(Report::new(Error::upstream(method, details)));
        }
        Ok(serde_json::from_value(self.response.clone()).unwrap())
    }
}

pub fn context(api: &Arc<RecordingApi>, arguments: Value) -> HandlerContext {
    let Value::Object(arguments) = arguments else {
        panic!("tool arguments must be an object");
    };
    HandlerContext::new(Some(arguments), Arc::clone(api) as Arc<dyn GitHubApi>)
}

fn search_request(query: &SearchQuery) -> Value {
    json!({
        "q": query.query,
        "sort": query.sort,
        "order": query.order,
        "pagination": query.pagination,
    })
}

#[async_trait]
impl GitHubApi for RecordingApi {
    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        pagination: Pagination,
    ) -> Result<Vec<Release>> {
        self.record(
            "list_releases",
            json!({"owner": owner, "repo": repo, "pagination": pagination}),
        )
    }

    async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Release> {
        self.record("get_latest_release", json!({"owner": owner, "repo": repo}))
    }

    async fn get_release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Release> {
        self.record(
            "get_release_by_tag",
            json!({"owner": owner, "repo": repo, "tag": tag}),
        )
    }

    async fn get_release(&self, owner: &str, repo: &str, release_id: i64) -> Result<Release> {
        self.record(
            "get_release",
            json!({"owner": owner, "repo": repo, "release_id": release_id}),
        )
    }

    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        release: &NewRelease,
    ) -> Result<Release> {
        self.record(
            "create_release",
            json!({"owner": owner, "repo": repo, "body": release}),
        )
    }

    async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
        patch: &ReleasePatch,
    ) -> Result<Release> {
        self.record(
            "update_release",
            json!({"owner": owner, "repo": repo, "release_id": release_id, "body": patch}),
        )
    }

    async fn delete_release(&self, owner: &str, repo: &str, release_id: i64) -> Result<()> {
        self.record::<Value>(
            "delete_release",
            json!({"owner": owner, "repo": repo, "release_id": release_id}),
        )
        .map(drop)
    }

    async fn generate_release_notes(
        &self,
        owner: &str,
        repo: &str,
        request: &GenerateNotesRequest,
    ) -> Result<Release> {
        self.record(
            "generate_release_notes",
            json!({"owner": owner, "repo": repo, "body": request}),
        )
    }

    async fn search_repositories(&self, query: &SearchQuery) -> Result<RepositorySearchResult> {
        self.record("search_repositories", search_request(query))
    }

    async fn search_code(&self, query: &SearchQuery) -> Result<CodeSearchResult> {
        self.record("search_code", search_request(query))
    }

    async fn search_users(&self, query: &SearchQuery) -> Result<UserSearchResult> {
        self.record("search_users", search_request(query))
    }

    async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<ContentsResponse> {
        self.record(
            "get_contents",
            json!({"owner": owner, "repo": repo, "path": path, "ref": reference}),
        )
    }
}
