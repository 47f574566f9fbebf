//! Output formatting module
//!
//! Formatters receive pages one at a time and write them to any
//! [`std::io::Write`]. Only the HTML formatter lays out full A4 sheets; the
//! others are for previewing and exporting.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tango_core::Page;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single page (`number` is 1-based across the sheet)
    fn write_page(&mut self, page: &Page, number: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Default sheet title
pub const DEFAULT_TITLE: &str = "mikan テスト";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text preview, one block per page
    #[default]
    Text,
    /// JSON document with every page and item
    Json,
    /// Markdown with one section per page
    Markdown,
    /// Printable A4 HTML document
    Html,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ];

    /// Lowercase name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }

    /// File extension for saved output
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }

    /// One-line description for `tango list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text preview of each page",
            OutputFormat::Json => "JSON export of pages and items",
            OutputFormat::Markdown => "Markdown sections, one per page",
            OutputFormat::Html => "Printable A4 sheets with four-line ruling",
        }
    }
}

/// Sheet-level settings shared by all formatters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOptions {
    /// Title printed at the top of each sheet
    pub title: String,
    /// Reveal the english answer under each prompt
    pub answer_key: bool,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            answer_key: false,
        }
    }
}

/// Create a formatter for `format` writing into `writer`
pub fn create_formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
    sheet: SheetOptions,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, sheet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, sheet).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, sheet)),
        OutputFormat::Html => Box::new(HtmlFormatter::new(writer, sheet)),
    }
}

/// Derive a file name from the sheet title
///
/// Characters that are unsafe in file names are replaced by `-`.
pub fn file_name_for(title: &str, format: OutputFormat) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => '-',
            other => other,
        })
        .collect();
    let stem = if stem.is_empty() { "tango" } else { stem.as_str() };

    format!("{}.{}", stem, format.extension())
}
