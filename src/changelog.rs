//! Changelog generation from commit history.
//!
//! Commit summaries are parsed with the loose header grammar and grouped into
//! fixed [`Category`] buckets. Structured commits with a too-short description
//! are dropped without notice; unstructured commits are always kept under
//! `others` with a `?` scope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::message::grammar::parse_changelog_header;

pub mod category;
pub mod writer;

pub use category::Category;
pub use writer::write_changelog;

/// Minimum description length for changelog entries.
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 10;

/// Number of commits read from history by default.
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Default changelog file name, relative to the repository work tree.
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Scope shown for commits that do not follow the grammar.
pub const UNSTRUCTURED_SCOPE: &str = "?";

const DOCUMENT_HEADER: &str = "# 📜 Changelog\n\n## Unreleased\n\n";

/// A single rendered changelog line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Commit scope, or `?` for unstructured commits.
    pub scope: String,
    /// Commit description.
    pub description: String,
}

/// Commits grouped by category, in input order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    buckets: BTreeMap<Category, Vec<ChangelogEntry>>,
}

impl Changelog {
    /// Groups `messages` (most recent first) using the default minimum length.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Aggregator::default().aggregate(messages)
    }

    /// Returns the entries of one bucket.
    pub fn entries(&self, category: Category) -> &[ChangelogEntry] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns non-empty buckets in rendering order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[ChangelogEntry])> {
        self.buckets
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(category, entries)| (*category, entries.as_slice()))
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns `true` when no commit made it into any bucket.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, category: Category, entry: ChangelogEntry) {
        self.buckets.entry(category).or_default().push(entry);
    }

    /// Renders the Markdown document.
    ///
    /// Sections appear in [`Category::ALL`] order and empty buckets are omitted.
    pub fn render(&self) -> String {
        let mut output = String::from(DOCUMENT_HEADER);

        for (category, entries) in self.sections() {
            output.push_str(&format!("### {}\n", category.label()));
            for entry in entries {
                output.push_str(&format!("- **{}**: {}\n", entry.scope, entry.description));
            }
            output.push('\n');
        }

        output
    }
}

/// Builds a [`Changelog`] from raw commit messages.
#[derive(Debug, Clone)]
pub struct Aggregator {
    min_description_length: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DESCRIPTION_LENGTH)
    }
}

impl Aggregator {
    /// Creates an aggregator with a fixed minimum description length.
    pub fn new(min_description_length: usize) -> Self {
        Self {
            min_description_length,
        }
    }

    /// Groups messages into buckets, preserving their order.
    pub fn aggregate<I, S>(&self, messages: I) -> Changelog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut changelog = Changelog::default();

        for message in messages {
            let message = message.as_ref().trim();

            match parse_changelog_header(message) {
                Some(parsed) => {
                    if parsed.description.chars().count() < self.min_description_length {
                        tracing::debug!(commit = message, "Dropping commit with short description");
                        continue;
                    }
                    changelog.push(
                        Category::from_tag(&parsed.commit_type),
                        ChangelogEntry {
                            scope: parsed.scope,
                            description: parsed.description,
                        },
                    );
                }
                None => changelog.push(
                    Category::Others,
                    ChangelogEntry {
                        scope: UNSTRUCTURED_SCOPE.to_string(),
                        description: message.to_string(),
                    },
                ),
            }
        }

        changelog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_and_unstructured_commits() {
        let changelog =
            Changelog::from_messages(["feat(ui): add new button component", "oops typo commit"]);
        let rendered = changelog.render();

        assert!(rendered.contains("### 🚀 Features\n- **ui**: add new button component\n"));
        assert!(rendered.contains("### 🔄 Miscellaneous\n- **?**: oops typo commit\n"));
        insta::assert_snapshot!(rendered, @r"
        # 📜 Changelog

        ## Unreleased

        ### 🚀 Features
        - **ui**: add new button component

        ### 🔄 Miscellaneous
        - **?**: oops typo commit
        ");
    }

    #[test]
    fn short_structured_commit_is_dropped() {
        let changelog = Changelog::from_messages(["fix(x): ok"]);
        assert!(changelog.is_empty());
        assert_eq!(changelog.render(), "# 📜 Changelog\n\n## Unreleased\n\n");
        assert!(!changelog.render().contains("###"));
    }

    #[test]
    fn short_unstructured_commit_is_kept() {
        let changelog = Changelog::from_messages(["wip"]);
        assert_eq!(
            changelog.entries(Category::Others),
            &[ChangelogEntry {
                scope: "?".to_string(),
                description: "wip".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_type_keeps_its_scope_in_others() {
        let changelog = Changelog::from_messages(["perf(db): faster index lookups"]);
        assert_eq!(
            changelog.entries(Category::Others),
            &[ChangelogEntry {
                scope: "db".to_string(),
                description: "faster index lookups".to_string(),
            }]
        );
    }

    #[test]
    fn empty_scope_is_unstructured() {
        let changelog = Changelog::from_messages(["feat(): add new button component"]);
        assert!(changelog.entries(Category::Feat).is_empty());
        assert_eq!(changelog.entries(Category::Others)[0].scope, "?");
        assert_eq!(
            changelog.entries(Category::Others)[0].description,
            "feat(): add new button component"
        );
    }

    #[test]
    fn unstructured_messages_are_trimmed() {
        let changelog = Changelog::from_messages(["   Merge branch 'main'  \n"]);
        assert_eq!(
            changelog.entries(Category::Others)[0].description,
            "Merge branch 'main'"
        );
    }

    #[test]
    fn entries_keep_input_order() {
        let changelog = Changelog::from_messages([
            "fix(api): newest fix in history",
            "feat(ui): a feature between fixes",
            "fix(db): oldest fix in history",
        ]);
        let fixes: Vec<_> = changelog
            .entries(Category::Fix)
            .iter()
            .map(|e| e.scope.as_str())
            .collect();
        assert_eq!(fixes, vec!["api", "db"]);
    }

    #[test]
    fn sections_follow_fixed_order() {
        let changelog = Changelog::from_messages([
            "random unstructured message",
            "chore(deps): bump serde to latest",
            "test(core): cover edge cases here",
            "refactor(cli): split command modules",
            "style(fmt): apply rustfmt everywhere",
            "docs(readme): describe installation",
            "fix(auth): resolved login issue",
            "feat(ui): add new button component",
        ]);

        let order: Vec<_> = changelog.sections().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());

        let rendered = changelog.render();
        let positions: Vec<usize> = Category::ALL
            .iter()
            .map(|c| rendered.find(c.label()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn custom_minimum_length() {
        let changelog = Aggregator::new(2).aggregate(["fix(x): ok"]);
        assert_eq!(changelog.len(), 1);
        assert_eq!(changelog.entries(Category::Fix)[0].description, "ok");
    }

    #[test]
    fn rendering_is_deterministic() {
        let messages = vec![
            "feat(ui): add new button component",
            "fix(auth): resolved login issue",
            "not structured at all",
        ];
        let first = Changelog::from_messages(&messages).render();
        let second = Changelog::from_messages(&messages).render();
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_buckets_by_key() {
        let changelog = Changelog::from_messages(["feat(ui): add new button component"]);
        let json = serde_json::to_value(&changelog).unwrap();
        assert_eq!(json["buckets"]["feat"][0]["scope"], "ui");
    }
}
