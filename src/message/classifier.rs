//! Commit message classification against a configured grammar.

use crate::config::Configuration;
use crate::message::error::ValidationError;
use crate::message::grammar::{description_after_separator, match_header, ParsedMessage};

/// Validates single-line commit messages.
///
/// Built from an explicit [`Configuration`] so that callers decide where the
/// settings come from. Classification is pure: the same message and
/// configuration always produce the same result.
#[derive(Debug, Clone)]
pub struct Classifier {
    commit_types: Vec<String>,
    min_description_length: usize,
}

impl Classifier {
    /// Creates a classifier for the given configuration.
    pub fn new(config: &Configuration) -> Self {
        Self {
            commit_types: config.commit_types.clone(),
            min_description_length: config.min_description_length,
        }
    }

    /// Returns the recognized commit types in configured order.
    pub fn commit_types(&self) -> &[String] {
        &self.commit_types
    }

    /// Returns the minimum description length in characters.
    pub fn min_description_length(&self) -> usize {
        self.min_description_length
    }

    /// Classifies a single-line message.
    ///
    /// Multi-line editor text should go through
    /// [`normalize_message`](crate::message::normalize_message) first.
    pub fn classify(&self, message: &str) -> Result<ParsedMessage, ValidationError> {
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        let header =
            match_header(message, &self.commit_types).ok_or(ValidationError::FormatMismatch)?;
        let description =
            description_after_separator(message).ok_or(ValidationError::FormatMismatch)?;

        if description.chars().count() < self.min_description_length {
            return Err(ValidationError::DescriptionTooShort {
                min: self.min_description_length,
            });
        }

        Ok(ParsedMessage {
            commit_type: header.tag.to_string(),
            scope: header.scope.to_string(),
            description: description.to_string(),
        })
    }

    /// Returns `true` when `message` passes every rule.
    pub fn is_valid(&self, message: &str) -> bool {
        self.classify(message).is_ok()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&Configuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(types: &[&str], min: usize) -> Classifier {
        Classifier::new(&Configuration {
            commit_types: types.iter().map(ToString::to_string).collect(),
            min_description_length: min,
        })
    }

    #[test]
    fn accepts_well_formed_message() {
        let parsed = Classifier::default()
            .classify("fix(auth): resolved login issue")
            .unwrap();
        assert_eq!(
            parsed,
            ParsedMessage {
                commit_type: "fix".to_string(),
                scope: "auth".to_string(),
                description: "resolved login issue".to_string(),
            }
        );
    }

    #[test]
    fn rejects_short_description() {
        assert_eq!(
            Classifier::default().classify("fix(auth): bad"),
            Err(ValidationError::DescriptionTooShort { min: 10 })
        );
    }

    #[test]
    fn rejects_unstructured_text() {
        assert_eq!(
            Classifier::default().classify("random text no structure"),
            Err(ValidationError::FormatMismatch)
        );
    }

    #[test]
    fn empty_input_is_never_a_format_error() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(""), Err(ValidationError::EmptyMessage));
        assert_eq!(classifier.classify("   "), Err(ValidationError::EmptyMessage));
    }

    #[test]
    fn unknown_type_is_a_format_error() {
        assert_eq!(
            Classifier::default().classify("perf(db): faster index lookups"),
            Err(ValidationError::FormatMismatch)
        );
    }

    #[test]
    fn reported_minimum_matches_configuration() {
        let classifier = classifier(&["feat"], 25);
        assert_eq!(
            classifier.classify("feat(ui): twenty chars exactly"),
            Err(ValidationError::DescriptionTooShort { min: 25 })
        );
    }

    #[test]
    fn boundary_length_is_accepted() {
        let classifier = classifier(&["fix"], 5);
        assert!(classifier.is_valid("fix(x): abcde"));
        assert!(!classifier.is_valid("fix(x): abcd"));
    }

    #[test]
    fn zero_minimum_accepts_empty_description() {
        let classifier = classifier(&["chore"], 0);
        assert_eq!(
            classifier.classify("chore(deps): ").map(|p| p.description),
            Ok(String::new())
        );
    }

    #[test]
    fn description_length_counts_characters() {
        let classifier = classifier(&["docs"], 4);
        assert!(classifier.is_valid("docs(i18n): ünïç"));
        assert!(!classifier.is_valid("docs(i18n): ünï"));
    }

    #[test]
    fn description_is_trimmed_before_measuring() {
        let classifier = classifier(&["fix"], 4);
        assert_eq!(
            classifier.classify("fix(x):    ab    "),
            Err(ValidationError::DescriptionTooShort { min: 4 })
        );
    }

    #[test]
    fn scope_with_separator_shifts_description() {
        let parsed = classifier(&["fix"], 1)
            .classify("fix(a: b): rest of it")
            .unwrap();
        assert_eq!(parsed.scope, "a: b");
        assert_eq!(parsed.description, "b): rest of it");
    }

    #[test]
    fn empty_type_list_rejects_everything() {
        let classifier = classifier(&[], 0);
        assert_eq!(
            classifier.classify("fix(auth): resolved login issue"),
            Err(ValidationError::FormatMismatch)
        );
    }

    #[test]
    fn custom_types_replace_defaults() {
        let classifier = classifier(&["build", "ci"], 3);
        assert!(classifier.is_valid("ci(actions): cache cargo"));
        assert!(!classifier.is_valid("feat(ui): add new button component"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn well_formed_messages_are_valid(
                tag in proptest::sample::select(vec!["feat", "fix", "docs", "style", "refactor", "test", "chore"]),
                scope in "[a-z0-9_-]{0,12}",
                description in "[a-zA-Z0-9][a-zA-Z0-9 ]{8,40}[a-zA-Z0-9]",
            ) {
                let message = format!("{tag}({scope}): {description}");
                let parsed = Classifier::default().classify(&message).unwrap();
                prop_assert_eq!(parsed.commit_type, tag);
                prop_assert_eq!(parsed.scope, scope);
                prop_assert_eq!(parsed.description, description);
            }

            #[test]
            fn short_descriptions_report_the_minimum(
                min in 2_usize..30,
                description in "[a-z]{1,30}",
            ) {
                prop_assume!(description.len() < min);
                let classifier = classifier(&["fix"], min);
                let message = format!("fix(core): {description}");
                prop_assert_eq!(
                    classifier.classify(&message),
                    Err(ValidationError::DescriptionTooShort { min })
                );
            }

            #[test]
            fn text_without_parenthesis_is_format_error(s in "[a-zA-Z0-9 :]{1,60}") {
                prop_assume!(!s.trim().is_empty());
                prop_assert_eq!(
                    Classifier::default().classify(&s),
                    Err(ValidationError::FormatMismatch)
                );
            }

            #[test]
            fn classification_is_idempotent(s in ".*") {
                let classifier = Classifier::default();
                prop_assert_eq!(classifier.classify(&s), classifier.classify(&s));
            }
        }
    }
}
