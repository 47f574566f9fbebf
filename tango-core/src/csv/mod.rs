//! CSV ingestion
//!
//! Turns raw CSV text into [`WordItem`]s. The input is expected to be small
//! (a classroom word list), so the whole text is processed in memory.
//!
//! Preprocessing strips a leading byte-order mark, normalizes `\r\n` and
//! lone `\r` to `\n`, and trims the whole text. The first line is the header;
//! blank lines anywhere after it are skipped.

mod header;
mod line;
mod options;

pub use header::HeaderColumns;
pub use line::split_csv_line;
pub use options::{ColumnPolicy, ParseMode, ParseOptions, ParseOptionsBuilder, RowPolicy};

use crate::error::{Error, Result};
use crate::types::WordItem;

const BOM: char = '\u{FEFF}';

/// Why a data row was left out of the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The `japanese` cell was empty or absent
    MissingJapanese,
    /// The `english` cell was empty or absent
    MissingEnglish,
    /// Both cells were empty or absent
    MissingBoth,
}

impl SkipReason {
    fn for_item(item: &WordItem) -> Option<Self> {
        match (item.japanese.trim().is_empty(), item.english.trim().is_empty()) {
            (false, false) => None,
            (true, false) => Some(SkipReason::MissingJapanese),
            (false, true) => Some(SkipReason::MissingEnglish),
            (true, true) => Some(SkipReason::MissingBoth),
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingJapanese => write!(f, "empty \"japanese\" cell"),
            SkipReason::MissingEnglish => write!(f, "empty \"english\" cell"),
            SkipReason::MissingBoth => write!(f, "empty \"japanese\" and \"english\" cells"),
        }
    }
}

/// A data row dropped under [`RowPolicy::DropIncomplete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number after line-ending normalization
    pub line: usize,
    /// Why the row was dropped
    pub reason: SkipReason,
}

/// Parse result with diagnostics for the uploader
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseReport {
    /// Resolved header columns
    pub header: HeaderColumns,
    /// Accepted items, in file order
    pub items: Vec<WordItem>,
    /// Number of non-blank data rows examined
    pub rows_read: usize,
    /// Rows left out of `items`
    pub skipped: Vec<SkippedRow>,
}

/// Parse CSV text into word items
///
/// Returns an empty vector when the text has no header line. Fails only
/// under [`ColumnPolicy::Require`] when a required column is missing.
pub fn parse_csv(text: &str, options: &ParseOptions) -> Result<Vec<WordItem>> {
    parse_csv_with_report(text, options).map(|report| report.items)
}

/// Parse CSV text and report which rows were dropped
pub fn parse_csv_with_report(text: &str, options: &ParseOptions) -> Result<ParseReport> {
    let normalized = normalize(text);
    let body = normalized.trim();
    if body.is_empty() {
        return Ok(ParseReport::default());
    }

    // Line numbers refer to the normalized text, including leading blank lines
    let leading = normalized.len() - normalized.trim_start().len();
    let line_offset = normalized[..leading].matches('\n').count();

    let mut lines = body.split('\n');
    let header_line = match lines.next() {
        Some(line) if !line.is_empty() => line,
        _ => return Ok(ParseReport::default()),
    };

    let header = HeaderColumns::resolve(&split_csv_line(header_line));
    if options.columns == ColumnPolicy::Require && !header.has_required() {
        return Err(Error::MissingRequiredColumn {
            missing: header.missing_required(),
        });
    }

    let mut report = ParseReport {
        header,
        ..ParseReport::default()
    };

    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        report.rows_read += 1;

        let item = read_row(&header, line);
        if options.rows == RowPolicy::DropIncomplete {
            if let Some(reason) = SkipReason::for_item(&item) {
                report.skipped.push(SkippedRow {
                    // header is line 1, first data line is line 2
                    line: line_offset + index + 2,
                    reason,
                });
                continue;
            }
        }
        report.items.push(item);
    }

    Ok(report)
}

fn normalize(text: &str) -> String {
    text.strip_prefix(BOM)
        .unwrap_or(text)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

fn read_row(header: &HeaderColumns, line: &str) -> WordItem {
    let cells = split_csv_line(line);
    let cell = |index: Option<usize>| -> String {
        index
            .and_then(|i| cells.get(i))
            .cloned()
            .unwrap_or_default()
    };

    let japanese = cell(header.japanese);
    let english = cell(header.english);
    let chapter = cell(header.chapter).trim().to_string();

    WordItem {
        japanese,
        english,
        chapter,
    }
}

/// Reusable CSV parser bound to one set of [`ParseOptions`]
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    options: ParseOptions,
}

impl CsvParser {
    /// Create a parser with the default (strict) options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Create a parser for a named preset
    pub fn for_mode(mode: ParseMode) -> Self {
        Self::with_options(mode.into())
    }

    /// Options in effect
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse CSV text into word items
    pub fn parse(&self, text: &str) -> Result<Vec<WordItem>> {
        parse_csv(text, &self.options)
    }

    /// Parse CSV text and report dropped rows
    pub fn parse_report(&self, text: &str) -> Result<ParseReport> {
        parse_csv_with_report(text, &self.options)
    }
}
