//! CSV ingestion and print pagination for vocabulary word tests
//!
//! This crate turns a vocabulary list (CSV text with `japanese`,
//! `english` and an optional `chapter` column) into printable pages of at
//! most [`PAGE_SIZE`] items each. Pages never mix chapters, and chapters
//! appear in the order they were first seen in the input.
//!
//! Both stages are pure, in-memory transformations: no I/O, no logging.
//! Reading files and rendering documents is left to the host.
//!
//! # Example
//!
//! ```rust
//! use tango_core::{build_pages, parse_csv, ParseOptions};
//!
//! let csv = "chapter,japanese,english\nUnit 1,りんご,apple\nUnit 1,ねこ,cat\n";
//! let items = parse_csv(csv, &ParseOptions::strict()).unwrap();
//! assert_eq!(items.len(), 2);
//!
//! let pages = build_pages(&items, "", false);
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].chapter, "Unit 1");
//! assert_eq!(pages[0].items[1].english, "cat");
//! ```

#![warn(missing_docs)]

pub mod csv;
pub mod error;
pub mod pager;
pub mod types;

pub use csv::{
    parse_csv, parse_csv_with_report, split_csv_line, ColumnPolicy, CsvParser, HeaderColumns,
    ParseMode, ParseOptions, ParseOptionsBuilder, ParseReport, RowPolicy, SkipReason, SkippedRow,
};
pub use error::{Error, Result};
pub use pager::{build_pages, build_pages_with_rng, resolve_chapter};
pub use types::{Page, WordItem, CHAPTER_PLACEHOLDER, PAGE_SIZE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_paginate() {
        let csv = "japanese,english,chapter\n犬,dog,A\n猫,cat,B\n鳥,bird,A\n";
        let items = parse_csv(csv, &ParseOptions::lenient()).unwrap();
        let pages = build_pages(&items, "", false);

        let chapters: Vec<&str> = pages.iter().map(|p| p.chapter.as_str()).collect();
        assert_eq!(chapters, vec!["A", "B"]);
        assert_eq!(pages[0].items.len(), 2);
        assert_eq!(pages[1].items.len(), 1);
    }

    #[test]
    fn test_public_exports() {
        let _parser = CsvParser::new();
        let _options: ParseOptions = ParseMode::Strict.into();
        assert_eq!(PAGE_SIZE, 12);
        assert!(!CHAPTER_PLACEHOLDER.is_empty());
    }
}
