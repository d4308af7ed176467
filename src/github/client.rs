//! GitHub REST client for releases.

use super::{CreateOutcome, DraftRelease, ReleaseClient};
use crate::error::{RelnotesError, Result};
use reqwest::{StatusCode, Url};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const API_VERSION: &str = "2022-11-28";

/// Request body for `POST /repos/{owner}/{repo}/releases`.
#[derive(Debug, Serialize)]
pub(super) struct CreateReleaseBody<'a> {
    pub tag_name: &'a str,
    pub name: &'a str,
    pub body: &'a str,
    pub draft: bool,
    pub generate_release_notes: bool,
    /// GitHub takes this one as a string enum (`"true"`, `"false"`, `"legacy"`).
    pub make_latest: &'a str,
}

impl<'a> From<&'a DraftRelease> for CreateReleaseBody<'a> {
    fn from(release: &'a DraftRelease) -> Self {
        Self {
            tag_name: &release.tag,
            name: &release.name,
            body: &release.body,
            draft: true,
            generate_release_notes: false,
            make_latest: "false",
        }
    }
}

/// Blocking client for one repository's releases.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    releases_url: String,
}

impl GitHubClient {
    /// Create a client for `repo` (`owner/name`) on the API at `base_url`.
    pub fn new(base_url: &str, repo: &str, token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            RelnotesError::UserError("GitHub token contains invalid characters".to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("relnotes/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RelnotesError::Http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            releases_url: releases_url(base_url, repo),
        })
    }

    pub fn releases_url(&self) -> &str {
        &self.releases_url
    }
}

impl ReleaseClient for GitHubClient {
    fn release_exists(&self, tag: &str) -> Result<bool> {
        let url = tag_url(&self.releases_url, tag)?;
        debug!(%url, "looking up release by tag");

        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|e| RelnotesError::Http(format!("{}: {}", url, e)))?;

        Ok(response.status() == StatusCode::OK)
    }

    fn create_draft_release(&self, release: &DraftRelease) -> Result<CreateOutcome> {
        debug!(url = %self.releases_url, tag = %release.tag, "creating draft release");

        let response = self
            .http
            .post(&self.releases_url)
            .json(&CreateReleaseBody::from(release))
            .send()
            .map_err(|e| RelnotesError::Http(format!("{}: {}", self.releases_url, e)))?;

        let status = response.status();
        Ok(CreateOutcome {
            success: status.is_success(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }
}

/// `{releases_url}/tags/{tag}` with the tag as one percent-encoded path segment.
///
/// Tags may contain `#`, `%` or `/`, none of which may reach the URL raw.
pub(super) fn tag_url(releases_url: &str, tag: &str) -> Result<Url> {
    let mut url = Url::parse(releases_url).map_err(|e| {
        RelnotesError::UserError(format!("invalid GitHub URL '{}': {}", releases_url, e))
    })?;
    url.path_segments_mut()
        .map_err(|_| {
            RelnotesError::UserError(format!("GitHub URL '{}' cannot take a path", releases_url))
        })?
        .pop_if_empty()
        .push("tags")
        .push(tag);
    Ok(url)
}

/// `{base}repos/{repo}/releases`, adding the `/` after `base` when missing.
pub(super) fn releases_url(base_url: &str, repo: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{}/repos/{}/releases", base, repo)
}
