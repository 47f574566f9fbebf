//! JSON output formatter

use super::{OutputFormatter, SheetOptions};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tango_core::{Page, WordItem};

/// JSON formatter - collects pages and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    sheet: SheetOptions,
    pretty: bool,
    pages: Vec<PageData>,
}

/// Top-level JSON document
#[derive(Debug, Serialize, Deserialize)]
pub struct SheetData {
    /// Sheet title
    pub title: String,
    /// Whether the sheet was rendered as an answer key
    pub answer_key: bool,
    /// Pages in print order
    pub pages: Vec<PageData>,
}

/// One page in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct PageData {
    /// 1-based page number
    pub page: usize,
    /// Resolved chapter label
    pub chapter: String,
    /// Items on this page
    pub items: Vec<WordItem>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter (pretty-printed)
    pub fn new(writer: W, sheet: SheetOptions) -> Self {
        Self {
            writer,
            sheet,
            pretty: true,
            pages: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_page(&mut self, page: &Page, number: usize) -> Result<()> {
        self.pages.push(PageData {
            page: number,
            chapter: page.chapter.clone(),
            items: page.items.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = SheetData {
            title: self.sheet.title.clone(),
            answer_key: self.sheet.answer_key,
            pages: std::mem::take(&mut self.pages),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
