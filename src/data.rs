//! Data structures and serialization helpers for command output.

pub mod check;
pub mod yaml;

pub use check::{CheckIssue, CheckReport, CheckSummary, CommitCheckResult, OutputFormat};
pub use yaml::to_yaml;
