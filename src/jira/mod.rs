//! Issue tracker search.
//!
//! The [`IssueSearchClient`] trait is the seam between the query loop and
//! the remote tracker. [`JiraClient`] implements it against Jira's
//! `rest/api/2/search` endpoint; tests use in-memory fakes.

mod client;


pub use client::JiraClient;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default Jira base URL when `JIRA_URL` is not set.
pub const DEFAULT_JIRA_URL: &str = "https://jira.mongodb.org/";

/// One page request against the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub fields: Vec<String>,
    pub jql: String,
    pub max_results: usize,
    pub start_at: usize,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchPage {
    /// Total number of matching issues as reported by this page.
    pub total: usize,
    #[serde(default)]
    pub issues: Vec<IssueRecord>,
}

/// One issue as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssueRecord {
    pub key: String,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Something that can run one page of an issue search.
pub trait IssueSearchClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchPage>;
}
