//! Check command: validates commit messages against the configured format.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::SettingsStore;
use crate::data::{CheckReport, CommitCheckResult, OutputFormat};
use crate::git::GitRepository;
use crate::message::normalize::strip_comment_lines;
use crate::message::{normalize_message, Classifier};

/// Check command options.
#[derive(Parser)]
pub struct CheckCommand {
    /// Commit message to check. Read from stdin when no message, file or range is given.
    #[arg(value_name = "MESSAGE", conflicts_with_all = ["file", "range"])]
    pub message: Option<String>,

    /// Reads the message from a file; lines starting with '#' are ignored.
    #[arg(long, value_name = "PATH", conflicts_with = "range")]
    pub file: Option<PathBuf>,

    /// Checks the summary of every commit in a range (e.g., HEAD~3..HEAD).
    #[arg(long, value_name = "COMMIT_RANGE")]
    pub range: Option<String>,

    /// Repository to read the range from.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Only shows failing messages in text output.
    #[arg(long)]
    pub quiet: bool,
}

impl CheckCommand {
    /// Executes the check command and exits non-zero if any message fails.
    pub fn execute(self, store: &SettingsStore) -> Result<()> {
        let output_format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);

        let report = self.build_report(store)?;
        self.output_report(&report, output_format)?;

        let exit_code = report.exit_code();
        if exit_code != 0 {
            std::process::exit(exit_code);
        }

        Ok(())
    }

    /// Classifies the requested messages with the stored configuration.
    pub fn build_report(&self, store: &SettingsStore) -> Result<CheckReport> {
        let config = store.load()?;
        let classifier = Classifier::new(&config);

        let results = if let Some(range) = &self.range {
            let repo = GitRepository::open_at(&self.repo)?;
            let commits = repo.commits_in_range(range)?;
            if commits.is_empty() {
                anyhow::bail!("No commits found in range: {range}");
            }
            commits
                .iter()
                .map(|commit| CommitCheckResult::from_commit(&classifier, commit))
                .collect()
        } else {
            let raw = self.read_message()?;
            let message = normalize_message(&raw);
            vec![CommitCheckResult::from_message(&classifier, &message)]
        };

        Ok(CheckReport::new(results))
    }

    fn read_message(&self) -> Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read message file: {}", path.display()))?;
            return Ok(strip_comment_lines(&content));
        }

        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read message from stdin")?;
        Ok(content)
    }

    fn output_report(&self, report: &CheckReport, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => print!("{}", format_text_report(report, self.quiet)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(report)
                    .context("Failed to serialize report to JSON")?;
                println!("{json}");
            }
            OutputFormat::Yaml => {
                let yaml = crate::data::to_yaml(report)?;
                println!("{yaml}");
            }
        }
        Ok(())
    }
}

/// Renders a report for the terminal.
pub fn format_text_report(report: &CheckReport, quiet: bool) -> String {
    let mut output = String::new();

    for result in &report.commits {
        if quiet && result.passes {
            continue;
        }

        let icon = if result.passes { "✅" } else { "❌" };
        if result.hash.is_empty() {
            output.push_str(&format!("{icon} {}\n", result.message));
        } else {
            output.push_str(&format!("{icon} {} {}\n", result.hash, result.message));
        }

        if let Some(issue) = &result.issue {
            output.push_str(&format!("   {}\n", issue.explanation));
        }
    }

    if report.commits.len() > 1 {
        output.push_str(&format!(
            "📊 {} of {} messages passed\n",
            report.summary.passing_commits, report.summary.total_commits
        ));
    }

    output
}
