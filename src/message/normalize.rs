//! Input normalization applied before classification.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("line break pattern is valid"));

/// Flattens editor text into the single line the classifier expects.
///
/// Surrounding whitespace is trimmed and each embedded line break becomes one
/// space, so `"fix(a): one\ntwo"` reads as `"fix(a): one two"`.
pub fn normalize_message(raw: &str) -> Cow<'_, str> {
    LINE_BREAK.replace_all(raw.trim(), " ")
}

/// Marker written by `git commit -v`; everything after it is the diff.
pub const SCISSORS_LINE: &str = "# ------------------------ >8 ------------------------";

/// Drops git comment lines (`#` in the first column) from a message file.
///
/// Text from the scissors line onward is dropped as well.
pub fn strip_comment_lines(raw: &str) -> String {
    raw.lines()
        .take_while(|line| line.trim_end() != SCISSORS_LINE)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_is_only_trimmed() {
        assert_eq!(normalize_message("  fix(a): x  "), "fix(a): x");
    }

    #[test]
    fn line_breaks_become_single_spaces() {
        assert_eq!(
            normalize_message("fix(a): first\nsecond\r\nthird"),
            "fix(a): first second third"
        );
        assert_eq!(normalize_message("fix(a): one\n\ntwo"), "fix(a): one  two");
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize_message(" \n\t\n "), "");
    }

    #[test]
    fn comment_lines_are_removed() {
        let raw = "feat(ui): add button\n# Please enter the commit message\n#\nbody";
        assert_eq!(strip_comment_lines(raw), "feat(ui): add button\nbody");
    }

    #[test]
    fn verbose_diff_is_cut_at_scissors() {
        let raw = "fix(auth): bad\n\
                   # Please enter the commit message\n\
                   # ------------------------ >8 ------------------------\n\
                   # Do not modify or remove the line above.\n\
                   diff --git a/src/lib.rs b/src/lib.rs\n\
                   +pub fn added() {}\n";
        assert_eq!(strip_comment_lines(raw), "fix(auth): bad");
    }
}
