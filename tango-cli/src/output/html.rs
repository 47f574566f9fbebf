//! Printable HTML output formatter
//!
//! Produces a standalone document with one A4 sheet per page. Every sheet
//! has exactly twelve numbered question rows; rows past the end of a short
//! page are printed blank so the layout never shifts.

use super::{OutputFormatter, SheetOptions};
use anyhow::Result;
use std::io::Write;
use tango_core::Page;

const STYLE: &str = r#"  @page { size: A4; margin: 8mm; }
  * {
    -webkit-print-color-adjust: exact;
    print-color-adjust: exact;
    margin: 0;
    padding: 0;
    box-sizing: border-box;
  }
  body { font-family: 'Hiragino Sans', 'Yu Gothic', sans-serif; }
  .page {
    width: 210mm;
    min-height: 297mm;
    padding: 1rem;
    margin: 0 auto;
    background: white;
    page-break-after: always;
  }
  .page:last-child { page-break-after: auto; }
  .header { padding: 1rem; }
  .header-grid {
    display: grid;
    grid-template-columns: repeat(12, 1fr);
    gap: 0.5rem;
  }
  .name-section {
    grid-column: span 8;
    border: 1px solid black;
    border-radius: 0.75rem;
    padding: 0.75rem;
    font-size: 1.125rem;
    font-weight: 600;
  }
  .date-eval {
    grid-column: span 4;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 0.5rem;
  }
  .date-box, .eval-box {
    border: 1px solid black;
    border-radius: 0.75rem;
    padding: 0.5rem;
    font-size: 0.875rem;
  }
  .label { font-size: 0.75rem; color: #525252; }
  .unit-row { margin-top: 0.75rem; font-size: 0.875rem; }
  .unit-name { font-weight: 600; }
  .questions { padding: 0 1rem; }
  .question {
    display: grid;
    grid-template-columns: 5fr 7fr;
    gap: 0.75rem;
    align-items: center;
    min-height: 20mm;
    border-bottom: 1px dashed #d4d4d4;
  }
  .prompt { font-size: 1rem; }
  .answer-key { font-size: 0.75rem; color: #a3a3a3; margin-top: 0.25rem; }
  .fourline {
    position: relative;
    height: 15mm;
    background-image:
      linear-gradient(to bottom, rgba(180,180,180,0.8) 0, rgba(180,180,180,0.8) 1px, transparent 1px),
      linear-gradient(to bottom, transparent 5mm, rgba(180,180,180,0.8) 5mm, rgba(180,180,180,0.8) calc(5mm + 1px), transparent calc(5mm + 1px)),
      linear-gradient(to bottom, transparent 10mm, rgba(0,0,0,0.8) 10mm, rgba(0,0,0,0.8) calc(10mm + 1px), transparent calc(10mm + 1px)),
      linear-gradient(to bottom, transparent calc(15mm - 1px), rgba(180,180,180,0.8) calc(15mm - 1px));
  }
  .footer { padding: 0.5rem 1rem; font-size: 0.75rem; color: #525252; }
"#;

const FOOTER_NOTE: &str =
    "※ 4線は小文字のアセンダー・ディセンダー位置の目安です。提出前につづり・大文字小文字を確認しましょう。";

/// HTML formatter - standalone A4 document
pub struct HtmlFormatter<W: Write> {
    writer: W,
    sheet: SheetOptions,
    started: bool,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W, sheet: SheetOptions) -> Self {
        Self {
            writer,
            sheet,
            started: false,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_head(&mut self) -> Result<()> {
        writeln!(self.writer, "<!DOCTYPE html>")?;
        writeln!(self.writer, "<html lang=\"ja\">")?;
        writeln!(self.writer, "<head>")?;
        writeln!(self.writer, "<meta charset=\"UTF-8\">")?;
        writeln!(
            self.writer,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(self.writer, "<title>{}</title>", escape(&self.sheet.title))?;
        writeln!(self.writer, "<style>\n{STYLE}</style>")?;
        writeln!(self.writer, "</head>")?;
        writeln!(self.writer, "<body>")?;
        self.started = true;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn write_page(&mut self, page: &Page, _number: usize) -> Result<()> {
        if !self.started {
            self.write_head()?;
        }

        let w = &mut self.writer;
        writeln!(w, "<div class=\"page\">")?;
        writeln!(w, "  <div class=\"header\">")?;
        writeln!(w, "    <div class=\"header-grid\">")?;
        writeln!(
            w,
            "      <div class=\"name-section\">{}（　）年（　）組　氏名（　　　　　　　　　）</div>",
            escape(&self.sheet.title)
        )?;
        writeln!(w, "      <div class=\"date-eval\">")?;
        writeln!(
            w,
            "        <div class=\"date-box\"><div class=\"label\">学習日</div><div>　　月　　日（　）</div></div>"
        )?;
        writeln!(
            w,
            "        <div class=\"eval-box\"><div class=\"label\">検印</div><div class=\"label\">評価</div></div>"
        )?;
        writeln!(w, "      </div>")?;
        writeln!(w, "    </div>")?;
        writeln!(
            w,
            "    <div class=\"unit-row\">単元：<span class=\"unit-name\">{}</span>／英単語の書き取りをしましょう。（各1点）</div>",
            escape(&page.chapter)
        )?;
        writeln!(w, "  </div>")?;

        writeln!(w, "  <div class=\"questions\">")?;
        for (idx, slot) in page.slots().enumerate() {
            let (prompt, answer) = match slot {
                Some(item) => (item.japanese.as_str(), item.english.as_str()),
                None => ("", ""),
            };

            writeln!(w, "    <div class=\"question\">")?;
            writeln!(w, "      <div class=\"prompt\">")?;
            writeln!(w, "        <div>（{}）{}</div>", idx + 1, escape(prompt))?;
            if self.sheet.answer_key && !answer.is_empty() {
                writeln!(
                    w,
                    "        <div class=\"answer-key\">Answer: {}</div>",
                    escape(answer)
                )?;
            }
            writeln!(w, "      </div>")?;
            writeln!(w, "      <div class=\"fourline\"></div>")?;
            writeln!(w, "    </div>")?;
        }
        writeln!(w, "  </div>")?;
        writeln!(w, "  <div class=\"footer\">{FOOTER_NOTE}</div>")?;
        writeln!(w, "</div>")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.started {
            self.write_head()?;
        }
        writeln!(self.writer, "</body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Escape text for use in HTML element content and attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
