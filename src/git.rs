//! Git repository access for history-based commands.

pub mod commit;
pub mod repository;

pub use commit::CommitRecord;
pub use repository::GitRepository;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;
