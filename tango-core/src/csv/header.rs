//! Header row resolution

/// Column positions resolved from a header row
///
/// Each column is found by case-insensitive substring match against its
/// header cell, taking the first match. Column order in the file is
/// irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderColumns {
    /// Index of the first header containing `japanese`
    pub japanese: Option<usize>,
    /// Index of the first header containing `english`
    pub english: Option<usize>,
    /// Index of the first header containing `chapter`
    pub chapter: Option<usize>,
}

impl HeaderColumns {
    /// Header keyword for the prompt column
    pub const JAPANESE: &'static str = "japanese";
    /// Header keyword for the answer column
    pub const ENGLISH: &'static str = "english";
    /// Header keyword for the optional chapter column
    pub const CHAPTER: &'static str = "chapter";

    /// Resolve column positions from split header cells
    pub fn resolve<S: AsRef<str>>(cells: &[S]) -> Self {
        let lowered: Vec<String> = cells.iter().map(|c| c.as_ref().to_lowercase()).collect();
        let find = |keyword: &str| lowered.iter().position(|cell| cell.contains(keyword));

        Self {
            japanese: find(Self::JAPANESE),
            english: find(Self::ENGLISH),
            chapter: find(Self::CHAPTER),
        }
    }

    /// Names of required columns that were not found
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.japanese.is_none() {
            missing.push(Self::JAPANESE);
        }
        if self.english.is_none() {
            missing.push(Self::ENGLISH);
        }
        missing
    }

    /// Whether both required columns are present
    pub fn has_required(&self) -> bool {
        self.japanese.is_some() && self.english.is_some()
    }
}
