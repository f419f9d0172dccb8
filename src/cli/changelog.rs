//! Changelog command: regenerates CHANGELOG.md from commit history.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::changelog::{
    write_changelog, Aggregator, Changelog, DEFAULT_CHANGELOG_FILE, DEFAULT_MAX_COUNT,
    DEFAULT_MIN_DESCRIPTION_LENGTH,
};
use crate::git::GitRepository;

/// Changelog command options.
#[derive(Parser)]
pub struct ChangelogCommand {
    /// Repository to read history from.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Output file (defaults to CHANGELOG.md at the repository root).
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of most recent commits to include.
    #[arg(long, default_value_t = DEFAULT_MAX_COUNT)]
    pub max_count: usize,

    /// Structured commits with a shorter description are left out.
    #[arg(long, default_value_t = DEFAULT_MIN_DESCRIPTION_LENGTH)]
    pub min_length: usize,

    /// Prints the changelog instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

impl ChangelogCommand {
    /// Executes the changelog command.
    pub fn execute(self) -> Result<()> {
        if !self.dry_run {
            println!("🔍 Fetching commit logs...");
        }

        let repo = GitRepository::open_at(&self.repo)
            .context("Failed to open git repository. Make sure you're in a git repository.")?;
        let changelog = self.build(&repo)?;
        let content = changelog.render();

        if self.dry_run {
            print!("{content}");
            return Ok(());
        }

        let output = self.output_path(&repo)?;
        write_changelog(&output, &content)?;
        println!("✅ {} successfully updated!", output.display());

        Ok(())
    }

    /// Reads recent history and groups it into a changelog.
    pub fn build(&self, repo: &GitRepository) -> Result<Changelog> {
        let commits = repo.recent_commits(self.max_count)?;
        Ok(Aggregator::new(self.min_length).aggregate(commits.iter().map(|c| &c.summary)))
    }

    fn output_path(&self, repo: &GitRepository) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }

        let workdir = repo
            .workdir()
            .context("Repository has no work tree; pass --output explicitly")?;
        Ok(workdir.join(DEFAULT_CHANGELOG_FILE))
    }
}
