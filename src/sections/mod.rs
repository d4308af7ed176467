//! Section rendering and document assembly.
//!
//! A release notes document is an ordered list of [`SectionSpec`]s. Each
//! section renders to a (possibly empty) string; the non-empty ones are
//! joined with a blank line between them.
//!
//! - Literal sections are resolved against the global parameters.
//! - Empty sections render to nothing.
//! - Query sections page through the issue tracker, see [`run_query`].

mod query;


pub use query::{PAGE_SIZE, build_jql, run_query};

use crate::config::SectionSpec;
use crate::error::Result;
use crate::jira::IssueSearchClient;
use crate::template::{ParameterSet, resolve};

/// Separator between rendered sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Everything a section needs to render.
pub struct RenderContext<'a> {
    /// Parameters shared by every template in the document.
    pub params: &'a ParameterSet,
    /// Filter every query section starts from.
    pub base_filter: &'a str,
    /// Source of issues for query sections.
    pub client: &'a dyn IssueSearchClient,
}

/// Render one section.
pub fn render_section(section: &SectionSpec, ctx: &RenderContext<'_>) -> Result<String> {
    match section {
        SectionSpec::Literal(template) => Ok(resolve(template, ctx.params)?),
        SectionSpec::Empty => Ok(String::new()),
        SectionSpec::Query(query) => run_query(query, ctx),
    }
}

/// Render every section in order and join the non-empty results.
///
/// The first error aborts assembly; no partial document is returned.
pub fn assemble(sections: &[SectionSpec], ctx: &RenderContext<'_>) -> Result<String> {
    let mut rendered = Vec::with_capacity(sections.len());

    for section in sections {
        let text = render_section(section, ctx)?;
        if !text.is_empty() {
            rendered.push(text);
        }
    }

    Ok(rendered.join(SECTION_SEPARATOR))
}
