//! Tests for the release publisher and GitHub wire format.

use super::client::{CreateReleaseBody, releases_url, tag_url};
use super::*;
use crate::test_support::FakeReleaseClient;
use std::time::Duration;

fn release() -> DraftRelease {
    DraftRelease {
        tag: "v1.2.0".to_string(),
        name: "Release 1.2.0".to_string(),
        body: "Notes for 1.2.0".to_string(),
    }
}

#[test]
fn test_publish_creates_draft() {
    let client = FakeReleaseClient::accepting();

    publish(&client, &release()).unwrap();

    assert_eq!(*client.lookups.borrow(), vec!["v1.2.0"]);
    assert_eq!(*client.created.borrow(), vec![release()]);
}

#[test]
fn test_existing_tag_aborts_before_create() {
    let client = FakeReleaseClient::with_existing("v1.2.0");

    let err = publish(&client, &release()).unwrap_err();

    assert!(matches!(
        err,
        RelnotesError::DuplicateRelease { ref tag } if tag == "v1.2.0"
    ));
    assert!(client.created.borrow().is_empty());
}

#[test]
fn test_other_existing_tag_does_not_conflict() {
    let client = FakeReleaseClient::with_existing("v1.1.0");

    publish(&client, &release()).unwrap();
    assert_eq!(client.created.borrow().len(), 1);
}

#[test]
fn test_rejected_create_reports_status_and_reason() {
    let client = FakeReleaseClient::rejecting(422, "Unprocessable Entity");

    let err = publish(&client, &release()).unwrap_err();

    match err {
        RelnotesError::PublishFailed { status, reason } => {
            assert_eq!(status, 422);
            assert_eq!(reason, "Unprocessable Entity");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_create_body_marks_draft() {
    let release = release();
    let json = serde_json::to_value(CreateReleaseBody::from(&release)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "tag_name": "v1.2.0",
            "name": "Release 1.2.0",
            "body": "Notes for 1.2.0",
            "draft": true,
            "generate_release_notes": false,
            "make_latest": "false"
        })
    );
}

#[test]
fn test_releases_url() {
    assert_eq!(
        releases_url("https://api.github.com/", "owner/repo"),
        "https://api.github.com/repos/owner/repo/releases"
    );
    assert_eq!(
        releases_url("https://ghe.example.com/api/v3", "owner/repo"),
        "https://ghe.example.com/api/v3/repos/owner/repo/releases"
    );
}

#[test]
fn test_tag_url_plain_tag() {
    let url = tag_url("https://api.github.com/repos/o/r/releases", "v1.2.0").unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.github.com/repos/o/r/releases/tags/v1.2.0"
    );
}

#[test]
fn test_tag_url_encodes_reserved_characters() {
    let url = tag_url("https://api.github.com/repos/o/r/releases", "v1.0#rc1").unwrap();
    assert_eq!(url.path(), "/repos/o/r/releases/tags/v1.0%23rc1");
    assert_eq!(url.fragment(), None);

    let url = tag_url("https://api.github.com/repos/o/r/releases", "100%/done").unwrap();
    assert_eq!(url.path(), "/repos/o/r/releases/tags/100%25%2Fdone");
}

#[test]
fn test_tag_url_rejects_invalid_base() {
    assert!(matches!(
        tag_url("not a url", "v1.2.0"),
        Err(RelnotesError::UserError(_))
    ));
}

#[test]
fn test_client_rejects_token_with_newline() {
    let result = GitHubClient::new(
        DEFAULT_GITHUB_API_URL,
        "owner/repo",
        "bad\ntoken",
        Duration::from_secs(5),
    );
    assert!(matches!(result, Err(RelnotesError::UserError(_))));
}

#[test]
fn test_client_builds_releases_url() {
    let client = GitHubClient::new(
        DEFAULT_GITHUB_API_URL,
        "owner/repo",
        "token",
        Duration::from_secs(5),
    )
    .unwrap();
    assert_eq!(
        client.releases_url(),
        "https://api.github.com/repos/owner/repo/releases"
    );
}
