//! Tokenizer for `type(scope): description` headers.
//!
//! Two entry points share the same shape:
//!
//! - [`match_header`] is the strict form used for live validation. The tag
//!   must be one of the configured commit types, compared literally, so tags
//!   such as `c++` never leak into a pattern.
//! - [`parse_changelog_header`] is the loose form used when grouping history.
//!   Any word tag is accepted and the scope must be non-empty.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A commit message split into its header parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Commit type tag (`feat`, `fix`, ...).
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Parenthesized scope, possibly empty.
    pub scope: String,
    /// Trimmed text after the first `": "`.
    pub description: String,
}

/// Borrowed view of a matched header prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// The tag that matched.
    pub tag: &'a str,
    /// Text between the parentheses.
    pub scope: &'a str,
}

/// Matches `tag(scope): ` at the start of `message`.
///
/// Tags are tried in the order given; empty tags never match. The scope may be
/// empty but cannot contain `)`. Exactly one space must follow the colon.
pub fn match_header<'a>(message: &'a str, tags: &[String]) -> Option<Header<'a>> {
    tags.iter()
        .map(String::as_str)
        .filter(|tag| !tag.is_empty())
        .find_map(|tag| {
            let after_tag = message.strip_prefix(tag)?;
            let (scope, rest) = split_scope(after_tag)?;
            rest.starts_with(' ').then_some(Header {
                tag: &message[..tag.len()],
                scope,
            })
        })
}

/// Returns the trimmed text after the first `": "` in `message`.
///
/// The search covers the whole message, so a scope that itself contains
/// `": "` shifts the description start.
pub fn description_after_separator(message: &str) -> Option<&str> {
    message
        .find(": ")
        .map(|index| message[index + 2..].trim())
}

/// Splits `(scope):rest`, returning the scope and whatever follows the colon.
fn split_scope(input: &str) -> Option<(&str, &str)> {
    let inner = input.strip_prefix('(')?;
    let close = inner.find(')')?;
    let rest = inner[close + 1..].strip_prefix(':')?;
    Some((&inner[..close], rest))
}

/// Fixed header pattern for history entries. Never built from user input.
#[allow(clippy::expect_used)]
static CHANGELOG_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)\(([^)]+)\):\s+(.+)$").expect("changelog header pattern is valid")
});

/// Parses a history entry with the loose changelog grammar.
///
/// The description must sit on a single line; multi-line input does not match.
pub fn parse_changelog_header(message: &str) -> Option<ParsedMessage> {
    let captures = CHANGELOG_HEADER.captures(message)?;
    Some(ParsedMessage {
        commit_type: captures[1].to_string(),
        scope: captures[2].to_string(),
        description: captures[3].to_string(),
    })
}
