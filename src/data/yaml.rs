//! YAML processing utilities

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize data structure to YAML string
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    serde_yaml::to_string(data).context("Failed to serialize to YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CheckReport, CommitCheckResult};
    use crate::message::Classifier;

    #[test]
    fn report_to_yaml() {
        let report = CheckReport::new(vec![CommitCheckResult::from_message(
            &Classifier::default(),
            "oops",
        )]);
        let yaml = to_yaml(&report).unwrap();
        assert!(yaml.contains("code: format_mismatch"));
        assert!(yaml.contains("failing_commits: 1"));
    }
}
