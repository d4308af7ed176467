//! Error types for the relnotes CLI.
//!
//! Uses thiserror for derive macros. Every error is terminal: `main` prints
//! it and exits with the code returned by [`RelnotesError::exit_code`].

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for relnotes operations.
#[derive(Error, Debug)]
pub enum RelnotesError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// The configuration file could not be read or parsed.
    #[error("Cannot load config file: {0}")]
    Config(String),

    /// A template placeholder could not be resolved.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The issue search request failed.
    #[error("Issue search failed: {0}")]
    Search(String),

    /// A release already exists for the computed tag.
    #[error("Release with the tag '{tag}' already exists")]
    DuplicateRelease { tag: String },

    /// The release service rejected the create request.
    #[error("Failed to create the release notes: ({status}) {reason}")]
    PublishFailed { status: u16, reason: String },

    /// Transport failure talking to the release service.
    #[error("Release service request failed: {0}")]
    Http(String),

    /// Writing the rendered output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RelnotesError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RelnotesError::UserError(_) => exit_codes::USER_ERROR,
            RelnotesError::Config(_) => exit_codes::USER_ERROR,
            RelnotesError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            RelnotesError::Search(_) => exit_codes::REMOTE_FAILURE,
            RelnotesError::DuplicateRelease { .. } => exit_codes::RELEASE_CONFLICT,
            RelnotesError::PublishFailed { .. } => exit_codes::REMOTE_FAILURE,
            RelnotesError::Http(_) => exit_codes::REMOTE_FAILURE,
            RelnotesError::Output(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for relnotes operations.
pub type Result<T> = std::result::Result<T, RelnotesError>;
