//! All-or-nothing changelog file output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Replaces `path` with `content` in full.
///
/// The content is written to a temporary file next to the target and then
/// renamed over it, so a failed run leaves any previous file untouched.
pub fn write_changelog<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .context("Failed to write changelog content")?;
    temp.persist(path)
        .with_context(|| format!("Failed to write changelog: {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote changelog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn replaces_existing_content() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");
        std::fs::write(&path, "old content that is much longer than the new one").unwrap();

        write_changelog(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn missing_directory_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("CHANGELOG.md");

        assert!(write_changelog(&path, "content").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn leaves_no_temporary_files_behind() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("CHANGELOG.md");
        write_changelog(&path, "content").unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("CHANGELOG.md")]);
    }
}
