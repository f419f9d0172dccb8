//! Check command result types for commit message validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::git::CommitRecord;
use crate::message::{Classifier, ParsedMessage, ValidationError};

/// Complete check report containing all commit results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Individual commit check results.
    pub commits: Vec<CommitCheckResult>,
    /// Summary statistics.
    pub summary: CheckSummary,
}

/// Result of checking a single message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitCheckResult {
    /// Commit hash (short form); empty for free-standing messages.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub hash: String,
    /// The message that was checked.
    pub message: String,
    /// Parsed header when the message passes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedMessage>,
    /// Rejection reason when the message fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<CheckIssue>,
    /// Whether the message passes all checks.
    pub passes: bool,
}

/// A rejection reason in report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIssue {
    /// Stable machine-readable code.
    pub code: String,
    /// Remediation message shown to the user.
    pub explanation: String,
}

impl From<&ValidationError> for CheckIssue {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code().to_string(),
            explanation: err.to_string(),
        }
    }
}

impl CommitCheckResult {
    /// Classifies a free-standing message.
    pub fn from_message(classifier: &Classifier, message: &str) -> Self {
        Self::from_outcome(String::new(), message, classifier.classify(message))
    }

    /// Classifies the summary line of a commit.
    pub fn from_commit(classifier: &Classifier, commit: &CommitRecord) -> Self {
        Self::from_outcome(
            commit.short_hash().to_string(),
            &commit.summary,
            classifier.classify(&commit.summary),
        )
    }

    fn from_outcome(
        hash: String,
        message: &str,
        outcome: Result<ParsedMessage, ValidationError>,
    ) -> Self {
        let (parsed, issue) = match outcome {
            Ok(parsed) => (Some(parsed), None),
            Err(err) => (None, Some(CheckIssue::from(&err))),
        };

        Self {
            hash,
            message: message.to_string(),
            passes: issue.is_none(),
            parsed,
            issue,
        }
    }
}

/// Summary statistics for a check report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Total number of messages checked.
    pub total_commits: usize,
    /// Number of messages that pass.
    pub passing_commits: usize,
    /// Number of messages with an issue.
    pub failing_commits: usize,
}

impl CheckSummary {
    /// Creates a summary from a list of check results.
    pub fn from_results(results: &[CommitCheckResult]) -> Self {
        let total_commits = results.len();
        let passing_commits = results.iter().filter(|r| r.passes).count();

        Self {
            total_commits,
            passing_commits,
            failing_commits: total_commits - passing_commits,
        }
    }
}

impl CheckReport {
    /// Creates a new check report from commit results.
    pub fn new(commits: Vec<CommitCheckResult>) -> Self {
        let summary = CheckSummary::from_results(&commits);
        Self { commits, summary }
    }

    /// Checks if any message failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.summary.failing_commits > 0
    }

    /// Determines the process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
