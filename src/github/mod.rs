//! Draft release publishing.
//!
//! The [`ReleaseClient`] trait is the seam to the release hosting service;
//! [`GitHubClient`] implements it against the GitHub REST API.

mod client;

#[cfg(test)]
mod tests;

pub use client::GitHubClient;

use crate::error::{RelnotesError, Result};
use tracing::info;

/// Default GitHub API base URL when `GITHUB_API_URL` is not set.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com/";

/// The assembled release, handed whole to the publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRelease {
    pub tag: String,
    pub name: String,
    pub body: String,
}

/// Result of a create-release request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub success: bool,
    pub status: u16,
    pub reason: String,
}

/// Something that can look up and create releases.
pub trait ReleaseClient {
    /// Whether a release already exists for `tag`.
    fn release_exists(&self, tag: &str) -> Result<bool>;

    /// Submit `release` as a draft.
    fn create_draft_release(&self, release: &DraftRelease) -> Result<CreateOutcome>;
}

/// Publish `release` as a draft.
///
/// Fails without creating anything if a release for the tag already exists.
/// A rejected create request is reported with the remote status and reason.
pub fn publish(client: &dyn ReleaseClient, release: &DraftRelease) -> Result<()> {
    if client.release_exists(&release.tag)? {
        return Err(RelnotesError::DuplicateRelease {
            tag: release.tag.clone(),
        });
    }

    let outcome = client.create_draft_release(release)?;
    if !outcome.success {
        return Err(RelnotesError::PublishFailed {
            status: outcome.status,
            reason: outcome.reason,
        });
    }

    info!(tag = %release.tag, status = outcome.status, "draft release created");
    Ok(())
}
