//! Markdown output formatter

use super::{OutputFormatter, SheetOptions};
use anyhow::Result;
use std::io::Write;
use tango_core::Page;

/// Markdown formatter - one section per page with a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sheet: SheetOptions,
    page_count: usize,
    item_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, sheet: SheetOptions) -> Self {
        Self {
            writer,
            sheet,
            page_count: 0,
            item_count: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn write_page(&mut self, page: &Page, number: usize) -> Result<()> {
        if self.page_count == 0 {
            writeln!(self.writer, "# {}", self.sheet.title)?;
        }
        self.page_count += 1;
        self.item_count += page.items.len();

        writeln!(self.writer)?;
        writeln!(self.writer, "## {} (page {})", page.chapter, number)?;
        writeln!(self.writer)?;
        for (idx, item) in page.items.iter().enumerate() {
            if self.sheet.answer_key && !item.english.is_empty() {
                writeln!(self.writer, "{}. {} *({})*", idx + 1, item.japanese, item.english)?;
            } else {
                writeln!(self.writer, "{}. {}", idx + 1, item.japanese)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total pages: {}, words: {}*",
            self.page_count, self.item_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
