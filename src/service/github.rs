//! GitHub REST API client.
//!
//! A thin client over the endpoints the community jobs need. Requests carry
//! the v3 Accept header and an optional token for higher rate limits.

use reqwest::header;
use serde::Deserialize;

use crate::error::AppError;

const GITHUB_API_URL: &str = "https://api.github.com";

/// Repository metadata returned by the repository endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct RepositoryInfo {
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    /// Primary language; absent for empty or mixed repositories
    pub language: Option<String>,
    pub owner: RepositoryOwner,
}

/// Owner subset of the repository response.
#[derive(Clone, Debug, Deserialize)]
pub struct RepositoryOwner {
    pub avatar_url: String,
}

/// Client for the GitHub REST API, bound to a single repository.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a client for the given repository.
    ///
    /// # Arguments
    /// - `owner` - Repository owner login
    /// - `repo` - Repository name
    /// - `token` - Optional API token; unauthenticated requests are heavily
    ///   rate limited
    ///
    /// # Returns
    /// - `Ok(GithubClient)` - Client ready for use
    /// - `Err(AppError::ReqwestErr)` - Failed to construct the HTTP client
    pub fn new(owner: String, repo: String, token: Option<String>) -> Result<Self, AppError> {
        // No redirects, to prevent SSRF-style surprises from crafted URLs
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            owner,
            repo,
            token,
        })
    }

    /// Fetches repository metadata (stars, forks, open issues, language).
    ///
    /// # Returns
    /// - `Ok(RepositoryInfo)` - Current repository metadata
    /// - `Err(AppError::ReqwestErr)` - Request failed or returned a non-2xx
    ///   status
    pub async fn get_repository_info(&self) -> Result<RepositoryInfo, AppError> {
        let url = format!("{}/repos/{}/{}", GITHUB_API_URL, self.owner, self.repo);

        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header(header::USER_AGENT, "repoherald");

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let info = request
            .send()
            .await?
            .error_for_status()?
            .json::<RepositoryInfo>()
            .await?;

        Ok(info)
    }
}
