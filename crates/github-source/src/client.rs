use std::time::Duration;

use importer_core::RepoId;
use ureq::Agent;

use crate::error::{GitHubError, Result};

/// Default GitHub REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub's default listing page size
const DEFAULT_PER_PAGE: usize = 30;

/// One fetched listing page: raw issue objects plus the `rel="next"` URL
/// from the `Link` response header, when the listing continues.
#[derive(Debug)]
pub struct RawPage {
    pub issues: Vec<serde_json::Value>,
    pub next_url: Option<String>,
}

/// GitHub REST API client
///
/// The token is optional: public repositories can be listed without
/// authentication, at a lower rate limit.
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
    state: String,
    per_page: usize,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new(token: Option<&str>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub
    /// Enterprise or testing)
    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
            state: "open".to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Issue state filter for listings: "open", "closed" or "all"
    pub fn state(mut self, state: &str) -> Self {
        self.state = state.to_string();
        self
    }

    /// Listing page size
    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Issue a GET with the GitHub media-type headers, plus auth when a
    /// token is configured
    fn get(&self, url: &str) -> Result<ureq::http::Response<ureq::Body>> {
        let mut request = self
            .agent
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");

        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        request.call().map_err(GitHubError::Http)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Try to parse as GitHub error response
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(GitHubError::Unauthorized)
        } else {
            Err(GitHubError::Api { status, message })
        }
    }

    /// Fetch the first listing page of issues for a repository
    pub fn list_issues(&self, repo: &RepoId) -> Result<RawPage> {
        let url = format!(
            "{}/repos/{}/issues?state={}&per_page={}",
            self.base_url,
            repo,
            urlencoding::encode(&self.state),
            self.per_page
        );
        self.fetch_page(&url)
    }

    /// Fetch one listing page by URL; dereferences next-page links
    pub fn fetch_page(&self, url: &str) -> Result<RawPage> {
        let response = self.get(url)?;
        let mut response = self.check_response(response)?;

        let next_url = next_link(&response);
        let issues: Vec<serde_json::Value> = response.body_mut().read_json()?;

        Ok(RawPage { issues, next_url })
    }
}

/// Extract the `rel="next"` target from the `Link` response header
fn next_link(response: &ureq::http::Response<ureq::Body>) -> Option<String> {
    let header = response.headers().get("link")?.to_str().ok()?;
    parse_next_link(header)
}

/// Parse an RFC 8288 `Link` header value, returning the `rel="next"` URL
fn parse_next_link(header: &str) -> Option<String> {
    for part in header.split(',') {
        let mut pieces = part.trim().split(';');
        let target = pieces.next().unwrap_or("").trim();
        if !(target.starts_with('<') && target.ends_with('>')) {
            continue;
        }
        let is_next = pieces.any(|p| matches!(p.trim(), "rel=\"next\"" | "rel=next"));
        if is_next {
            return Some(target[1..target.len() - 1].to_string());
        }
    }
    None
}
