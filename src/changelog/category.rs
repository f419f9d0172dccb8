//! Fixed changelog categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Changelog section a commit is grouped under.
///
/// Declaration order is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// New features.
    Feat,
    /// Bug fixes.
    Fix,
    /// Documentation changes.
    Docs,
    /// Formatting and styling.
    Style,
    /// Code restructuring.
    Refactor,
    /// Test changes.
    Test,
    /// Maintenance.
    Chore,
    /// Everything else, including unstructured messages.
    Others,
}

impl Category {
    /// All categories in rendering order.
    pub const ALL: [Self; 8] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Test,
        Self::Chore,
        Self::Others,
    ];

    /// Maps a commit type tag to its category; unknown tags fall into `Others`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "feat" => Self::Feat,
            "fix" => Self::Fix,
            "docs" => Self::Docs,
            "style" => Self::Style,
            "refactor" => Self::Refactor,
            "test" => Self::Test,
            "chore" => Self::Chore,
            _ => Self::Others,
        }
    }

    /// Bucket key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Others => "others",
        }
    }

    /// Section heading used in the rendered changelog.
    pub fn label(self) -> &'static str {
        match self {
            Self::Feat => "🚀 Features",
            Self::Fix => "🐛 Fixes",
            Self::Docs => "📝 Documentation",
            Self::Style => "💅 Styling",
            Self::Refactor => "🔨 Refactoring",
            Self::Test => "🧪 Tests",
            Self::Chore => "🛠 Chores",
            Self::Others => "🔄 Miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
