//! Validate command implementation

use anyhow::Result;
use clap::Args;
use tango_core::{CsvParser, HeaderColumns, ParseMode, ParseReport};

use super::print::{init_logging, Mode};
use crate::input::InputSource;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// CSV word list to check (`-` for stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,

    /// How strictly to read the CSV
    #[arg(short, long, value_enum, default_value = "strict")]
    pub mode: Mode,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(0, false);

        let source = if self.input == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(self.input.clone().into())
        };

        println!("Validating word list: {source}");

        let text = source.read_text()?;
        let mode = ParseMode::from(self.mode);
        match CsvParser::for_mode(mode).parse_report(&text) {
            Ok(report) if report.items.is_empty() => {
                print!("{}", summarize(&report, mode));
                println!("✗ Word list is invalid!");
                println!("  Error: no usable word items");
                Err(anyhow::anyhow!(
                    "Validation failed: {source} contains no usable word items"
                ))
            }
            Ok(report) => {
                print!("{}", summarize(&report, mode));
                println!("✓ Word list is valid!");
                Ok(())
            }
            Err(e) => {
                println!("✗ Word list is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Render a human-readable summary of a parse report
pub fn summarize(report: &ParseReport, mode: ParseMode) -> String {
    let column = |index: Option<usize>| match index {
        Some(i) => format!("column {}", i + 1),
        None => "not found".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("  Mode: {mode}\n"));
    out.push_str(&format!(
        "  {}: {}\n",
        HeaderColumns::JAPANESE,
        column(report.header.japanese)
    ));
    out.push_str(&format!(
        "  {}: {}\n",
        HeaderColumns::ENGLISH,
        column(report.header.english)
    ));
    out.push_str(&format!(
        "  {}: {}\n",
        HeaderColumns::CHAPTER,
        column(report.header.chapter)
    ));
    out.push_str(&format!("  Data rows: {}\n", report.rows_read));
    out.push_str(&format!("  Words: {}\n", report.items.len()));

    if !report.skipped.is_empty() {
        out.push_str(&format!("  Skipped rows: {}\n", report.skipped.len()));
        for skipped in &report.skipped {
            out.push_str(&format!("    line {}: {}\n", skipped.line, skipped.reason));
        }
    }

    out
}
