use crate::error::{RelnotesError, Result};
use crate::github::{CreateOutcome, DraftRelease, ReleaseClient};
use crate::jira::{IssueRecord, IssueSearchClient, SearchPage, SearchRequest};
use std::cell::RefCell;
use std::collections::VecDeque;

pub(crate) fn issue(key: &str, fields: serde_json::Value) -> IssueRecord {
    let fields = match fields {
        serde_json::Value::Object(map) => map,
        other => panic!("issue fields must be an object, got {}", other),
    };
    IssueRecord {
        key: key.to_string(),
        fields,
    }
}

pub(crate) fn summary_issue(key: &str, summary: &str) -> IssueRecord {
    issue(key, serde_json::json!({ "summary": summary }))
}

enum Responses {
    /// Serve `start_at..start_at + max_results` out of a fixed issue list.
    Slice(Vec<IssueRecord>),
    /// Hand out prepared pages in order, ignoring the request offsets.
    Scripted(RefCell<VecDeque<SearchPage>>),
    Fail(String),
}

/// In-memory search client that records every request it receives.
pub(crate) struct FakeSearchClient {
    responses: Responses,
    requests: RefCell<Vec<SearchRequest>>,
}

impl FakeSearchClient {
    pub(crate) fn with_issues(issues: Vec<IssueRecord>) -> Self {
        Self::new(Responses::Slice(issues))
    }

    pub(crate) fn empty() -> Self {
        Self::with_issues(Vec::new())
    }

    pub(crate) fn scripted(pages: Vec<SearchPage>) -> Self {
        Self::new(Responses::Scripted(RefCell::new(pages.into())))
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::new(Responses::Fail(message.to_string()))
    }

    fn new(responses: Responses) -> Self {
        Self {
            responses,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<SearchRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn start_offsets(&self) -> Vec<usize> {
        self.requests.borrow().iter().map(|r| r.start_at).collect()
    }
}

impl IssueSearchClient for FakeSearchClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        self.requests.borrow_mut().push(request.clone());

        match &self.responses {
            Responses::Slice(issues) => {
                let start = request.start_at.min(issues.len());
                let end = (start + request.max_results).min(issues.len());
                Ok(SearchPage {
                    total: issues.len(),
                    issues: issues[start..end].to_vec(),
                })
            }
            Responses::Scripted(pages) => pages
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| RelnotesError::Search("no more scripted pages".to_string())),
            Responses::Fail(message) => Err(RelnotesError::Search(message.clone())),
        }
    }
}

/// In-memory release client that records lookups and create requests.
pub(crate) struct FakeReleaseClient {
    existing_tags: Vec<String>,
    outcome: CreateOutcome,
    pub(crate) lookups: RefCell<Vec<String>>,
    pub(crate) created: RefCell<Vec<DraftRelease>>,
}

impl FakeReleaseClient {
    pub(crate) fn accepting() -> Self {
        Self::new(
            Vec::new(),
            CreateOutcome {
                success: true,
                status: 201,
                reason: "Created".to_string(),
            },
        )
    }

    pub(crate) fn with_existing(tag: &str) -> Self {
        let mut client = Self::accepting();
        client.existing_tags.push(tag.to_string());
        client
    }

    pub(crate) fn rejecting(status: u16, reason: &str) -> Self {
        Self::new(
            Vec::new(),
            CreateOutcome {
                success: false,
                status,
                reason: reason.to_string(),
            },
        )
    }

    fn new(existing_tags: Vec<String>, outcome: CreateOutcome) -> Self {
        Self {
            existing_tags,
            outcome,
            lookups: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
        }
    }
}

impl ReleaseClient for FakeReleaseClient {
    fn release_exists(&self, tag: &str) -> Result<bool> {
        self.lookups.borrow_mut().push(tag.to_string());
        Ok(self.existing_tags.iter().any(|t| t == tag))
    }

    fn create_draft_release(&self, release: &DraftRelease) -> Result<CreateOutcome> {
        self.created.borrow_mut().push(release.clone());
        Ok(self.outcome.clone())
    }
}
