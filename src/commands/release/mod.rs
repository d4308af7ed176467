//! Implementation of the release notes pipeline.
//!
//! Loads the config, renders the title, tag and body, prints them, and
//! publishes the result as a draft release.


use crate::cli::Cli;
use crate::config::Config;
use crate::error::{RelnotesError, Result};
use crate::github::{DraftRelease, GitHubClient, ReleaseClient, publish};
use crate::jira::{IssueSearchClient, JiraClient};
use crate::sections::{RenderContext, assemble};
use crate::template::{ParameterSet, resolve};
use std::io::Write;
use std::time::Duration;
use tracing::info;

const BODY_RULE: &str = "----------";

/// Execute the release command.
///
/// Publishing options are checked before any remote work so a missing
/// token fails fast instead of after the Jira queries.
pub fn cmd_release(cli: Cli) -> Result<()> {
    let timeout = Duration::from_secs(cli.timeout_secs);

    let github = if cli.dry_run {
        None
    } else {
        Some(github_client(&cli, timeout)?)
    };

    info!(path = %cli.config.display(), "Loading config...");
    let config = Config::load(&cli.config)?;
    info!(
        sections = config.sections.len(),
        queries = config.query_section_count(),
        "Config loaded."
    );

    let jira = JiraClient::new(&cli.jira_url, cli.jira_token.clone(), timeout)?;
    info!(url = %jira.search_url(), "Using Jira search endpoint");

    let release = run_release(
        &config,
        &cli.release_version,
        &jira,
        github.as_ref().map(|c| c as &dyn ReleaseClient),
        &mut std::io::stdout().lock(),
    )?;

    if github.is_none() {
        info!(tag = %release.tag, "Dry run, release notes not published.");
    }
    info!("Done.");
    Ok(())
}

/// Render the release and, when a release client is given, publish it.
///
/// Returns the rendered release either way. Title, tag and body are
/// written to `out` along the way.
pub fn run_release(
    config: &Config,
    version: &str,
    search: &dyn IssueSearchClient,
    releases: Option<&dyn ReleaseClient>,
    out: &mut impl Write,
) -> Result<DraftRelease> {
    let release = render_release(config, version, search, out)?;

    writeln!(out, "{}", BODY_RULE)?;
    writeln!(out, "{}", release.body)?;
    writeln!(out, "{}", BODY_RULE)?;
    out.flush()?;

    if let Some(client) = releases {
        info!("Publishing release notes...");
        publish(client, &release)?;
    }

    Ok(release)
}

/// Render title, tag and body for `version`.
///
/// Title and tag are written to `out` as soon as they resolve, so they are
/// visible even when a section fails afterwards.
pub fn render_release(
    config: &Config,
    version: &str,
    search: &dyn IssueSearchClient,
    out: &mut impl Write,
) -> Result<DraftRelease> {
    let params = ParameterSet::new().with("version", version);

    info!("Processing title...");
    let name = resolve(&config.title, &params)?;
    writeln!(out, "Title: {}", name)?;
    out.flush()?;
    info!("Processing tag...");
    let tag = resolve(&config.tag, &params)?;
    writeln!(out, "Tag: {}", tag)?;
    out.flush()?;

    info!("Processing content...");
    let ctx = RenderContext {
        params: &params,
        base_filter: &config.base_filter,
        client: search,
    };
    let body = assemble(&config.sections, &ctx)?;

    Ok(DraftRelease { tag, name, body })
}

fn github_client(cli: &Cli, timeout: Duration) -> Result<GitHubClient> {
    let repo = cli.repo.as_deref().ok_or_else(|| {
        RelnotesError::UserError(
            "no repository to publish to.\n\n\
             Pass --repo <owner/name> or set GITHUB_REPOSITORY, or use --dry-run."
                .to_string(),
        )
    })?;
    let token = cli.github_token.as_deref().ok_or_else(|| {
        RelnotesError::UserError(
            "no GitHub token.\n\n\
             Pass --github-token or set GITHUB_TOKEN, or use --dry-run."
                .to_string(),
        )
    })?;

    let client = GitHubClient::new(&cli.github_url, repo, token, timeout)?;
    info!(url = %client.releases_url(), "Publishing target");
    Ok(client)
}
