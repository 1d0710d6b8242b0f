//! REST implementation of [`GitHubApi`] over a pooled `reqwest` client.

use std::time::Duration;

use async_trait::async_trait;
use error_stack::Report;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::api::GitHubApi;
use super::types::{
    CodeSearchResult, ContentsResponse, GenerateNotesRequest, NewRelease, Release, ReleasePatch,
    RepositorySearchResult, SearchQuery, UserSearchResult,
};
use crate::config::ServerConfig;
use crate::constants::{
    CONNECTION_TIMEOUT, GITHUB_ACCEPT, GITHUB_API_VERSION, GITHUB_API_VERSION_HEADER,
    POOL_IDLE_TIMEOUT, POOL_MAX_IDLE_PER_HOST, REQUEST_TIMEOUT, USER_AGENT,
};
use crate::error::{Error, Result};
use crate::field_extraction::Pagination;

/// Authenticated GitHub REST client
pub struct GitHubClient {
    http:     Client,
    base_url: Url,
    token:    String,
}

impl GitHubClient {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            Report::new(Error::Configuration(format!("invalid API base URL: {e}")))
                .attach(config.api_base_url.clone())
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Report::new(Error::Configuration(format!(
                "API base URL cannot carry a path: {base_url}"
            ))));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            HeaderName::from_static(GITHUB_API_VERSION_HEADER),
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT))
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .connect_timeout(Duration::from_secs(CONNECTION_TIMEOUT))
            .build()
            .map_err(|e| {
                Report::new(Error::Configuration(format!(
                    "failed to build HTTP client: {e}"
                )))
            })?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Append percent-encoded path segments and query pairs to the API root
    fn endpoint<I, S>(&self, segments: I, query: &[(&str, String)]) -> Url
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        // `new` rejects roots that cannot be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        url
    }

    fn repo_endpoint(&self, owner: &str, repo: &str, rest: &[&str]) -> Url {
        self.endpoint(["repos", owner, repo].iter().chain(rest), &[])
    }

    /// Send the request and turn transport failures and non-2xx statuses into upstream errors
    async fn execute(&self, action: &str, request: RequestBuilder) -> Result<Response> {
        let request = request
            .bearer_auth(&self.token)
            .build()
            .map_err(|e| Report::new(Error::upstream(action, e)))?;
        let target = format!("{} {}", request.method(), request.url());
        tracing::debug!(%target, "sending GitHub request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| Report::new(Error::upstream(action, e)).attach(target.clone()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%target, %status, "GitHub request succeeded");
            return Ok(response);
        }

        tracing::warn!(%target, %status, "GitHub request failed");
        Err(status_failure(action, status, response.text().await).attach(target))
    }

    async fn fetch<T: DeserializeOwned>(&self, action: &str, request: RequestBuilder) -> Result<T> {
        self.execute(action, request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| {
                Report::new(Error::upstream(
                    action,
                    format!("unreadable response body: {e}"),
                ))
            })
    }

    async fn search<T: DeserializeOwned>(
        &self,
        action: &str,
        kind: &str,
        query: &SearchQuery,
    ) -> Result<T> {
        let url = self.endpoint(["search", kind], &query.query_pairs());
        self.fetch(action, self.http.get(url)).await
    }
}

/// Upstream error for a non-2xx status, carrying the body or the reason it could not be read
fn status_failure<E: std::fmt::Display>(
    action: &str,
    status: StatusCode,
    body: std::result::Result<String, E>,
) -> Report<Error> {
    match body {
        Ok(body) => Report::new(Error::upstream(action, format!("{status}: {body}"))),
        Err(e) => Report::new(Error::upstream(
            action,
            format!("{status}: failed to read response body"),
        ))
        .attach(e.to_string()),
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        pagination: Pagination,
    ) -> Result<Vec<Release>> {
        let mut url = self.repo_endpoint(owner, repo, &["releases"]);
        url.query_pairs_mut().extend_pairs(pagination.query_pairs());
        self.fetch("list releases", self.http.get(url)).await
    }

    async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Release> {
        let url = self.repo_endpoint(owner, repo, &["releases", "latest"]);
        self.fetch("get latest release", self.http.get(url)).await
    }

    async fn get_release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Release> {
        let url = self.repo_endpoint(owner, repo, &["releases", "tags", tag]);
        self.fetch("get release by tag", self.http.get(url)).await
    }

    async fn get_release(&self, owner: &str, repo: &str, release_id: i64) -> Result<Release> {
        let id = release_id.to_string();
        let url = self.repo_endpoint(owner, repo, &["releases", &id]);
        self.fetch("get release", self.http.get(url)).await
    }

    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        release: &NewRelease,
    ) -> Result<Release> {
        let url = self.repo_endpoint(owner, repo, &["releases"]);
        self.fetch("create release", self.http.post(url).json(release))
            .await
    }

    async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: i64,
        patch: &ReleasePatch,
    ) -> Result<Release> {
        let id = release_id.to_string();
        let url = self.repo_endpoint(owner, repo, &["releases", &id]);
        self.fetch(
            "update release",
            self.http.request(Method::PATCH, url).json(patch),
        )
        .await
    }

    async fn delete_release(&self, owner: &str, repo: &str, release_id: i64) -> Result<()> {
        let id = release_id.to_string();
        let url = self.repo_endpoint(owner, repo, &["releases", &id]);
        self.execute("delete release", self.http.delete(url))
            .await
            .map(drop)
    }

    async fn generate_release_notes(
        &self,
        owner: &str,
        repo: &str,
        request: &GenerateNotesRequest,
    ) -> Result<Release> {
        let url = self.repo_endpoint(owner, repo, &["releases", "generate-notes"]);
        self.fetch("generate release notes", self.http.post(url).json(request))
            .await
    }

    async fn search_repositories(&self, query: &SearchQuery) -> Result<RepositorySearchResult> {
        self.search("search repositories", "repositories", query)
            .await
    }

    async fn search_code(&self, query: &SearchQuery) -> Result<CodeSearchResult> {
        self.search("search code", "code", query).await
    }

    async fn search_users(&self, query: &SearchQuery) -> Result<UserSearchResult> {
        self.search("search users", "users", query).await
    }

    async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: Option<&str>,
    ) -> Result<ContentsResponse> {
        let query: Vec<(&str, String)> = reference
            .filter(|reference| !reference.is_empty())
            .map(|reference| ("ref", reference.to_string()))
            .into_iter()
            .collect();
        let segments = ["repos", owner, repo, "contents"]
            .into_iter()
            .chain(path.split('/').filter(|segment| !segment.is_empty()));
        let url = self.endpoint(segments, &query);
        self.fetch("get file contents", self.http.get(url)).await
    }
}
