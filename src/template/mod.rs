//! Template resolution for `${dotted.path}` placeholders.
//!
//! Templates are plain strings containing placeholders such as `${version}`
//! or `${fixVersion.name}`. Each placeholder path is split on `.` and looked
//! up segment by segment in a [`ParameterSet`].
//!
//! # Syntax
//!
//! - `${name}` - substitutes the value of `name`
//! - `${a.b.c}` - descends into nested mappings
//! - anything else, including `${}` or `${a b}`, is copied verbatim
//!
//! # Error Handling
//!
//! Resolution is strict: a path that cannot be resolved is an error, never
//! an empty substitution. There is no per-placeholder fallback.

mod value;


pub use value::{ParameterSet, Value};

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([\w.]+)\}").expect("placeholder pattern is valid"));

/// Error type for template resolution failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A path segment does not exist in the mapping at its depth.
    UnresolvedPath {
        /// The full placeholder path.
        path: String,
        /// The segment that was not found.
        segment: String,
    },
    /// A non-terminal segment names a value that is not a mapping.
    NotAMapping {
        /// The full placeholder path.
        path: String,
        /// The segment whose value could not be descended into.
        segment: String,
    },
    /// The path resolved to a mapping, which has no text form.
    NotScalar {
        /// The full placeholder path.
        path: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnresolvedPath { path, segment } => {
                write!(
                    f,
                    "unresolved template path '${{{}}}': '{}' is not defined",
                    path, segment
                )
            }
            TemplateError::NotAMapping { path, segment } => {
                write!(
                    f,
                    "unresolved template path '${{{}}}': '{}' is not a mapping",
                    path, segment
                )
            }
            TemplateError::NotScalar { path } => {
                write!(
                    f,
                    "template path '${{{}}}' resolves to a mapping, not a value",
                    path
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Resolve every placeholder in `template` against `params`.
///
/// Placeholders are resolved independently, left to right. Substituted text
/// is not scanned again, so a value containing `${...}` is inserted as is.
///
/// # Examples
///
/// ```ignore
/// let params = ParameterSet::new().with("version", "1.2.0");
/// assert_eq!(resolve("Release ${version}", &params).unwrap(), "Release 1.2.0");
/// ```
pub fn resolve(template: &str, params: &ParameterSet) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let whole = caps.get_match();
        let path = &caps[1];

        result.push_str(&template[last..whole.start()]);
        result.push_str(&lookup_text(params, path)?);
        last = whole.end();
    }

    result.push_str(&template[last..]);
    Ok(result)
}

/// Walk `path` through nested mappings and return the leaf's text form.
fn lookup_text(params: &ParameterSet, path: &str) -> Result<String, TemplateError> {
    let mut segments = path.split('.');
    // split always yields at least one item
    let first = segments.next().unwrap_or_default();

    let mut current = params.get(first).ok_or_else(|| TemplateError::UnresolvedPath {
        path: path.to_string(),
        segment: first.to_string(),
    })?;
    let mut parent = first;

    for segment in segments {
        let map = current.as_map().ok_or_else(|| TemplateError::NotAMapping {
            path: path.to_string(),
            segment: parent.to_string(),
        })?;
        current = map.get(segment).ok_or_else(|| TemplateError::UnresolvedPath {
            path: path.to_string(),
            segment: segment.to_string(),
        })?;
        parent = segment;
    }

    current.to_text().ok_or_else(|| TemplateError::NotScalar {
        path: path.to_string(),
    })
}
