//! Commit records read from history.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::Commit;
use serde::{Deserialize, Serialize};

use crate::git::SHORT_HASH_LEN;

/// A commit as seen by the changelog and range checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full SHA-1 hash of the commit
    pub hash: String,
    /// First line of the commit message
    pub summary: String,
    /// Author date with the author's timezone
    pub date: DateTime<FixedOffset>,
}

impl CommitRecord {
    /// Create a CommitRecord from git2::Commit
    pub fn from_git_commit(commit: &Commit) -> Result<Self> {
        let hash = commit.id().to_string();
        let summary =
            String::from_utf8_lossy(commit.summary_bytes().unwrap_or_default()).into_owned();

        let when = commit.author().when();
        let offset =
            FixedOffset::east_opt(when.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
        let date = DateTime::from_timestamp(when.seconds(), 0)
            .context("Invalid commit timestamp")?
            .with_timezone(&offset);

        Ok(Self {
            hash,
            summary,
            date,
        })
    }

    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        &self.hash[..SHORT_HASH_LEN.min(self.hash.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{ObjectType, Repository};

    #[test]
    fn non_utf8_summary_is_kept_lossily() {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(temp_dir.path()).unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();

        let mut raw = format!(
            "tree {tree_id}\n\
             author Test User <test@example.com> 1700000000 +0100\n\
             committer Test User <test@example.com> 1700000000 +0100\n\n"
        )
        .into_bytes();
        raw.extend_from_slice(b"fix(ui): caf\xe9 menu spacing\n");
        let oid = repo.odb().unwrap().write(ObjectType::Commit, &raw).unwrap();

        let record = CommitRecord::from_git_commit(&repo.find_commit(oid).unwrap()).unwrap();
        assert_eq!(record.summary, "fix(ui): caf\u{fffd} menu spacing");
        assert_eq!(record.short_hash().len(), SHORT_HASH_LEN);
        assert_eq!(record.date.offset().local_minus_utc(), 3600);
    }
}
