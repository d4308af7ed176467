//! Jira REST client.

use super::{IssueSearchClient, SearchPage, SearchRequest};
use crate::error::{RelnotesError, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// Blocking client for Jira's search endpoint.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    search_url: String,
    token: Option<String>,
}

impl JiraClient {
    /// Create a client for the Jira instance at `base_url`.
    ///
    /// A trailing `/` is added to `base_url` when missing.
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("relnotes/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RelnotesError::Search(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            search_url: search_url(base_url),
            token,
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl IssueSearchClient for JiraClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        debug!(
            url = %self.search_url,
            start_at = request.start_at,
            max_results = request.max_results,
            "requesting search page"
        );

        let mut builder = self.http.post(&self.search_url).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .map_err(|e| RelnotesError::Search(format!("{}: {}", self.search_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelnotesError::Search(format!(
                "{} returned ({}) {}",
                self.search_url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<SearchPage>()
            .map_err(|e| RelnotesError::Search(format!("invalid search response: {}", e)))
    }
}

/// Join the search endpoint path onto a Jira base URL.
pub(super) fn search_url(base_url: &str) -> String {
    let mut url = base_url.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str("rest/api/2/search");
    url
}
