//! CLI argument parsing for relnotes.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! release pipeline itself lives in the `commands` module.

use crate::github::DEFAULT_GITHUB_API_URL;
use crate::jira::DEFAULT_JIRA_URL;
use clap::Parser;
use std::path::PathBuf;

/// Relnotes: render release notes from Jira queries and publish them as a
/// draft GitHub release.
///
/// The config file declares the release title and tag templates, a base
/// Jira filter, and an ordered list of sections. Every template may use
/// `${version}`; query section templates also see `${key}` and the
/// requested issue fields.
#[derive(Parser, Debug)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Release version, available to templates as `${version}`.
    #[arg(value_name = "VERSION")]
    pub release_version: String,

    /// Path to the release notes YAML config.
    pub config: PathBuf,

    /// Jira base URL.
    #[arg(long, env = "JIRA_URL", default_value = DEFAULT_JIRA_URL)]
    pub jira_url: String,

    /// Bearer token for Jira (anonymous when omitted).
    #[arg(long, env = "JIRA_TOKEN", hide_env_values = true)]
    pub jira_token: Option<String>,

    /// GitHub API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub github_url: String,

    /// Repository to publish to, as `owner/name`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: Option<String>,

    /// Bearer token for GitHub.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Timeout for each HTTP request, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Render and print the release notes without publishing them.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
