//! Issue query sections.

use super::RenderContext;
use crate::config::QuerySection;
use crate::error::Result;
use crate::jira::{IssueRecord, SearchRequest};
use crate::template::{ParameterSet, TemplateError, Value, resolve};
use tracing::{debug, warn};

/// Number of issues requested per search page.
pub const PAGE_SIZE: usize = 10;

/// Combine the base filter with a section filter.
///
/// An absent or empty section filter leaves the base filter unchanged.
pub fn build_jql(base_filter: &str, section_filter: Option<&str>) -> String {
    match section_filter {
        Some(filter) if !filter.is_empty() => format!("{} AND ({})", base_filter, filter),
        _ => base_filter.to_string(),
    }
}

/// Render a query section.
///
/// Pages through the search results until the number of consumed issues
/// reaches the `total` reported by the most recent page. `total` is read
/// again from every page, so a total that changes mid-run moves the stop
/// point with it.
///
/// Returns an empty string when nothing matched; the title is only
/// rendered when at least one issue was.
pub fn run_query(section: &QuerySection, ctx: &RenderContext<'_>) -> Result<String> {
    let jql = build_jql(ctx.base_filter, section.filter.as_deref());
    let jql = resolve(&jql, ctx.params)?;
    debug!(%jql, "running issue query");

    let mut lines = Vec::new();
    let mut consumed = 0;
    let mut total = 1; // unknown until the first page arrives

    while consumed < total {
        let page = ctx.client.search(&SearchRequest {
            fields: section.fields.clone(),
            jql: jql.clone(),
            max_results: PAGE_SIZE,
            start_at: consumed,
        })?;
        total = page.total;

        if page.issues.is_empty() {
            if consumed < total {
                warn!(
                    consumed,
                    total, "search returned an empty page before reaching the total; stopping"
                );
            }
            break;
        }

        for issue in page.issues {
            consumed += 1;
            let params = issue_params(ctx.params, &section.fields, issue)?;
            lines.push(resolve(&section.template, &params)?);
        }
    }

    if lines.is_empty() {
        return Ok(String::new());
    }

    let body = lines.join("\n");
    match section.title.as_deref() {
        Some(title) if !title.is_empty() => {
            let heading = resolve(title, ctx.params)?;
            Ok(format!("{}\n{}", heading, body))
        }
        _ => Ok(body),
    }
}

/// Per-issue parameters: the globals plus `key` and the configured fields.
///
/// Every configured field must be present in the payload (JSON `null`
/// counts as present), whether or not the template references it.
fn issue_params(
    global: &ParameterSet,
    fields: &[String],
    issue: IssueRecord,
) -> std::result::Result<ParameterSet, TemplateError> {
    let mut params = global.clone();
    params.insert("key", issue.key);
    for field in fields {
        let value = issue
            .fields
            .get(field)
            .cloned()
            .ok_or_else(|| TemplateError::UnresolvedPath {
                path: field.clone(),
                segment: field.clone(),
            })?;
        params.insert(field.as_str(), Value::from(value));
    }
    Ok(params)
}
