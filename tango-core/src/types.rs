//! Record types shared by the parser and the pager

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of answer slots on one printed sheet
pub const PAGE_SIZE: usize = 12;

/// Chapter label used when neither the item nor the caller supplies one
pub const CHAPTER_PLACEHOLDER: &str = "(チャプター未設定)";

/// One vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordItem {
    /// Prompt shown to the student
    pub japanese: String,
    /// Expected answer, only printed in answer-key mode
    pub english: String,
    /// Grouping label; empty means unassigned
    #[cfg_attr(feature = "serde", serde(default))]
    pub chapter: String,
}

impl WordItem {
    /// Create a new item
    pub fn new(
        japanese: impl Into<String>,
        english: impl Into<String>,
        chapter: impl Into<String>,
    ) -> Self {
        Self {
            japanese: japanese.into(),
            english: english.into(),
            chapter: chapter.into(),
        }
    }

    /// Whether both the prompt and the answer are present
    ///
    /// Only complete items are meaningful on a printed test; the lenient
    /// parser drops everything else.
    pub fn is_complete(&self) -> bool {
        !self.japanese.trim().is_empty() && !self.english.trim().is_empty()
    }
}

/// One printable sheet
///
/// `chapter` is always the resolved, non-empty label. `items` holds between
/// one and [`PAGE_SIZE`] entries, all from the same chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    /// Display label for this page
    pub chapter: String,
    /// Items printed on this page, in print order
    pub items: Vec<WordItem>,
}

impl Page {
    /// Iterate over exactly [`PAGE_SIZE`] answer slots
    ///
    /// Slots past the end of `items` are `None` so a renderer can draw blank
    /// rows for them.
    pub fn slots(&self) -> impl Iterator<Item = Option<&WordItem>> + '_ {
        self.items
            .iter()
            .map(Some)
            .chain(std::iter::repeat(None))
            .take(PAGE_SIZE.max(self.items.len()))
    }

    /// Number of unused slots at the end of the sheet
    pub fn blank_slots(&self) -> usize {
        PAGE_SIZE.saturating_sub(self.items.len())
    }
}
