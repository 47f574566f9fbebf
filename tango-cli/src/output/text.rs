//! Plain text output formatter

use super::{OutputFormatter, SheetOptions};
use anyhow::Result;
use std::io::Write;
use tango_core::Page;

/// Plain text formatter - one block of numbered prompts per page
pub struct TextFormatter<W: Write> {
    writer: W,
    sheet: SheetOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, sheet: SheetOptions) -> Self {
        Self { writer, sheet }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_page(&mut self, page: &Page, number: usize) -> Result<()> {
        if number > 1 {
            writeln!(self.writer)?;
        }
        writeln!(
            self.writer,
            "{} [{}] page {}",
            self.sheet.title, page.chapter, number
        )?;

        for (idx, item) in page.items.iter().enumerate() {
            writeln!(self.writer, "({}) {}", idx + 1, item.japanese)?;
            if self.sheet.answer_key && !item.english.is_empty() {
                writeln!(self.writer, "    Answer: {}", item.english)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
