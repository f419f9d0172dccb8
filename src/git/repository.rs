//! Git repository operations

use std::path::Path;

use anyhow::{Context, Result};
use git2::{Repository, Sort};

use crate::git::CommitRecord;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open repository at specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::open(path)
            .with_context(|| format!("Failed to open git repository: {}", path.display()))?;

        Ok(Self { repo })
    }

    /// Get repository path (the `.git` directory)
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get workdir path
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get the most recent commits reachable from HEAD, newest first
    pub fn recent_commits(&self, max_count: usize) -> Result<Vec<CommitRecord>> {
        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .set_sorting(Sort::TIME)
            .context("Failed to set revwalk sorting")?;
        walker
            .push_head()
            .context("Failed to resolve HEAD. Does the repository have any commits?")?;

        let mut commits = Vec::new();
        for oid in walker.take(max_count) {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;
            commits.push(CommitRecord::from_git_commit(&commit)?);
        }

        tracing::debug!(count = commits.len(), max_count, "Read commit history");
        Ok(commits)
    }

    /// Parse commit range and get commits, oldest first
    ///
    /// Accepts `HEAD`, a single revision, or `start..end`. Merge commits in a
    /// range are skipped.
    pub fn commits_in_range(&self, range: &str) -> Result<Vec<CommitRecord>> {
        let mut commits = Vec::new();

        if let Some((start_spec, end_spec)) = range.split_once("..") {
            if start_spec.is_empty() || end_spec.contains("..") {
                anyhow::bail!("Invalid range format: {}", range);
            }
            let end_spec = if end_spec.is_empty() { "HEAD" } else { end_spec };

            let start_commit = self
                .repo
                .revparse_single(start_spec)
                .with_context(|| format!("Failed to parse start commit: {}", start_spec))?
                .peel_to_commit()
                .context("Failed to peel start object to commit")?;
            let end_commit = self
                .repo
                .revparse_single(end_spec)
                .with_context(|| format!("Failed to parse end commit: {}", end_spec))?
                .peel_to_commit()
                .context("Failed to peel end object to commit")?;

            // Walk from end_commit back to start_commit (exclusive)
            let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
            walker
                .push(end_commit.id())
                .context("Failed to push end commit")?;
            walker
                .hide(start_commit.id())
                .context("Failed to hide start commit")?;

            for oid in walker {
                let oid = oid.context("Failed to get commit OID from walker")?;
                let commit = self
                    .repo
                    .find_commit(oid)
                    .context("Failed to find commit")?;

                if commit.parent_count() > 1 {
                    continue;
                }

                commits.push(CommitRecord::from_git_commit(&commit)?);
            }

            commits.reverse();
        } else {
            let commit = self
                .repo
                .revparse_single(range)
                .with_context(|| format!("Failed to parse commit: {}", range))?
                .peel_to_commit()
                .context("Failed to peel object to commit")?;
            commits.push(CommitRecord::from_git_commit(&commit)?);
        }

        Ok(commits)
    }
}
