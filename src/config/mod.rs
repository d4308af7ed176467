//! Release notes configuration.
//!
//! This module defines the Config struct that represents the release notes
//! YAML document: the title and tag templates, the base issue filter, and
//! the ordered list of sections.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, QuerySection, SectionSpec};
