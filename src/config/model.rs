//! Config struct and section definitions.

use serde::Deserialize;

/// Configuration for one release notes document.
///
/// Unknown fields in the YAML are ignored for forward compatibility. All
/// four known fields are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Template for the release name.
    pub title: String,

    /// Template for the release tag.
    pub tag: String,

    /// Issue filter shared by every query section.
    #[serde(rename = "base-filter")]
    pub base_filter: String,

    /// Document sections in output order.
    pub sections: Vec<SectionSpec>,
}

/// One section of the release notes document.
///
/// In YAML a section is a string (literal template), `null` (empty), or a
/// mapping (issue query).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Option<RawSection>")]
pub enum SectionSpec {
    /// Static template text.
    Literal(String),
    /// Renders to nothing.
    Empty,
    /// One line per matching issue.
    Query(QuerySection),
}

/// A section rendered from the results of an issue search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuerySection {
    /// Issue fields to request and expose to the template.
    pub fields: Vec<String>,

    /// Extra filter combined with the base filter as `base AND (filter)`.
    #[serde(default)]
    pub filter: Option<String>,

    /// Heading template, rendered only when at least one issue matched.
    #[serde(default)]
    pub title: Option<String>,

    /// Per-issue template.
    pub template: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawSection {
    Literal(String),
    Query(QuerySection),
}

impl From<Option<RawSection>> for SectionSpec {
    fn from(raw: Option<RawSection>) -> Self {
        match raw {
            None => SectionSpec::Empty,
            Some(RawSection::Literal(text)) => SectionSpec::Literal(text),
            Some(RawSection::Query(query)) => SectionSpec::Query(query),
        }
    }
}
