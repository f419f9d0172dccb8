//! Commit message grammar and classification.
//!
//! Messages follow the `type(scope): description` shape. The [`Classifier`]
//! checks a single line against a user-configured list of commit types and a
//! minimum description length; the changelog reuses the same header grammar
//! with a looser tag rule.

pub mod classifier;
pub mod error;
pub mod grammar;
pub mod normalize;

pub use classifier::Classifier;
pub use error::ValidationError;
pub use grammar::ParsedMessage;
pub use normalize::normalize_message;

/// Well-formed message shown in every remediation hint.
pub const EXAMPLE_MESSAGE: &str = "fix(auth): resolved login issue";
