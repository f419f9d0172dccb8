//! Validation outcomes for commit messages.

use thiserror::Error;

/// Reasons a commit message is rejected.
///
/// These are user input outcomes, not faults. The `Display` text is the
/// remediation shown to the user and always includes a well-formed example.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered.
    #[error("Please enter a commit message. Example: fix(auth): resolved login issue")]
    EmptyMessage,

    /// The message does not start with `type(scope): `.
    #[error("Invalid format! Example: fix(auth): resolved login issue")]
    FormatMismatch,

    /// The description after `": "` is shorter than the configured minimum.
    #[error("Description must be at least {min} characters. Example: fix(auth): resolved login issue")]
    DescriptionTooShort {
        /// Required minimum length in characters.
        min: usize,
    },
}

impl ValidationError {
    /// Returns a stable machine-readable code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "empty_message",
            Self::FormatMismatch => "format_mismatch",
            Self::DescriptionTooShort { .. } => "description_too_short",
        }
    }
}
