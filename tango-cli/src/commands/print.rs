//! Print command implementation

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tango_core::{build_pages, build_pages_with_rng, CsvParser, Page, ParseMode, WordItem};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_sources, FileReader, InputSource};
use crate::output::{create_formatter, file_name_for, OutputFormat, SheetOptions};
use crate::progress::ProgressReporter;

/// Arguments for the print command
#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Input CSV files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file or directory (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's default_format]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Title printed on every sheet
    #[arg(short, long)]
    pub title: Option<String>,

    /// Chapter label for words without one
    #[arg(short, long, value_name = "CHAPTER")]
    pub default_chapter: Option<String>,

    /// Shuffle words within each chapter
    #[arg(short, long)]
    pub shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Print the answer under each prompt
    #[arg(short, long)]
    pub answer_key: bool,

    /// How strictly to read the CSV
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Require both columns, keep every row
    Strict,
    /// Tolerate missing columns, drop incomplete rows
    Lenient,
}

impl From<Mode> for ParseMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Strict => ParseMode::Strict,
            Mode::Lenient => ParseMode::Lenient,
        }
    }
}

/// Effective settings after merging the config file and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSettings {
    /// Output format
    pub format: OutputFormat,
    /// Sheet title and answer-key mode
    pub sheet: SheetOptions,
    /// Chapter label for words without one
    pub default_chapter: String,
    /// Shuffle within chapters
    pub shuffle: bool,
    /// Fixed shuffle seed
    pub seed: Option<u64>,
    /// Parse strictness
    pub mode: ParseMode,
    /// Pretty print JSON
    pub pretty_json: bool,
}

impl PrintSettings {
    /// Paginate items according to these settings
    pub fn paginate(&self, items: &[WordItem]) -> Vec<Page> {
        match (self.shuffle, self.seed) {
            (true, Some(seed)) => build_pages_with_rng(
                items,
                &self.default_chapter,
                true,
                &mut StdRng::seed_from_u64(seed),
            ),
            (shuffle, _) => build_pages(items, &self.default_chapter, shuffle),
        }
    }
}

impl PrintArgs {
    /// Execute the print command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        init_logging(self.verbose, self.quiet);

        log::info!("Starting sheet generation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(&config);
        log::debug!("Effective settings: {:?}", settings);

        if settings.seed.is_some() && !settings.shuffle {
            log::warn!("--seed has no effect without --shuffle");
        }

        let sources = resolve_sources(&self.input)?;
        let items = read_items(&sources, settings.mode, self.quiet)?;
        let pages = settings.paginate(&items);

        if pages.is_empty() {
            log::warn!("No word items to paginate");
            eprintln!("No pages to print: the input contains no usable word items.");
            return Ok(());
        }

        log::info!(
            "Paginated {} words into {} pages",
            items.len(),
            pages.len()
        );

        let writer = self.open_output(&settings)?;
        let mut formatter =
            create_formatter(settings.format, writer, settings.sheet, settings.pretty_json);
        for (idx, page) in pages.iter().enumerate() {
            formatter.write_page(page, idx + 1)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Merge config file values with command-line flags
    pub fn resolve(&self, config: &CliConfig) -> PrintSettings {
        PrintSettings {
            format: self.format.unwrap_or(config.output.default_format),
            sheet: SheetOptions {
                title: self
                    .title
                    .clone()
                    .unwrap_or_else(|| config.sheet.title.clone()),
                answer_key: self.answer_key || config.sheet.answer_key,
            },
            default_chapter: self
                .default_chapter
                .clone()
                .unwrap_or_else(|| config.sheet.default_chapter.clone()),
            shuffle: self.shuffle || config.sheet.shuffle,
            seed: self.seed,
            mode: self.mode.map(ParseMode::from).unwrap_or(config.parsing.mode),
            pretty_json: config.output.pretty_json,
        }
    }

    fn open_output(&self, settings: &PrintSettings) -> Result<Box<dyn Write + Send + Sync>> {
        let Some(target) = &self.output else {
            return Ok(Box::new(io::stdout()));
        };

        let path = if target.is_dir() {
            target.join(file_name_for(&settings.sheet.title, settings.format))
        } else {
            target.clone()
        };

        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        log::info!("Writing {} output to {}", settings.format.as_str(), path.display());

        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Read and parse every source, concatenating items in source order
pub fn read_items(sources: &[InputSource], mode: ParseMode, quiet: bool) -> Result<Vec<WordItem>> {
    let parser = CsvParser::for_mode(mode);
    let mut progress = ProgressReporter::new(quiet);
    progress.init_files(sources.len() as u64);

    let mut items = Vec::new();
    for source in sources {
        if let InputSource::File(path) = source {
            log::debug!("Reading {} ({} bytes)", path.display(), FileReader::file_size(path)?);
        }

        let text = source.read_text()?;
        let report = parser
            .parse_report(&text)
            .map_err(|e| CliError::ParseError(format!("{source}: {e}")))?;

        for skipped in &report.skipped {
            log::warn!("{source}: line {} skipped ({})", skipped.line, skipped.reason);
        }
        log::info!(
            "{source}: {} words from {} rows",
            report.items.len(),
            report.rows_read
        );

        items.extend(report.items);
        progress.file_completed(&source.to_string());
    }
    progress.finish();

    Ok(items)
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> PrintArgs {
        PrintArgs {
            input: vec![input.to_string()],
            output: None,
            format: None,
            title: None,
            default_chapter: None,
            shuffle: false,
            seed: None,
            answer_key: false,
            mode: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = args("words.csv").resolve(&CliConfig::default());
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.sheet, SheetOptions::default());
        assert_eq!(settings.default_chapter, "");
        assert!(!settings.shuffle);
        assert_eq!(settings.mode, ParseMode::Strict);
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::from_toml(
            "[sheet]\ntitle = \"From file\"\ndefault_chapter = \"File\"\n[parsing]\nmode = \"lenient\"\n[output]\ndefault_format = \"json\"\n",
        )
        .unwrap();

        let mut cli = args("words.csv");
        cli.title = Some("From flag".into());
        cli.mode = Some(Mode::Strict);
        cli.format = Some(OutputFormat::Html);

        let settings = cli.resolve(&config);
        assert_eq!(settings.sheet.title, "From flag");
        assert_eq!(settings.default_chapter, "File");
        assert_eq!(settings.mode, ParseMode::Strict);
        assert_eq!(settings.format, OutputFormat::Html);
    }

    #[test]
    fn test_seeded_paginate_is_reproducible() {
        let items: Vec<WordItem> = (0..30)
            .map(|i| WordItem::new(format!("語{i}"), format!("w{i}"), "A"))
            .collect();

        let mut cli = args("words.csv");
        cli.shuffle = true;
        cli.seed = Some(11);
        let settings = cli.resolve(&CliConfig::default());

        assert_eq!(settings.paginate(&items), settings.paginate(&items));
    }

    #[test]
    fn test_read_items_concatenates_sources() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.csv");
        let second = dir.path().join("b.csv");
        fs::write(&first, "japanese,english,chapter\n犬,dog,B\n").unwrap();
        fs::write(&second, "japanese,english,chapter\n猫,cat,A\n").unwrap();

        let sources = vec![InputSource::File(first), InputSource::File(second)];
        let items = read_items(&sources, ParseMode::Strict, true).unwrap();
        assert_eq!(items[0].english, "dog");
        assert_eq!(items[1].english, "cat");
    }

    #[test]
    fn test_read_items_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "word,meaning\n犬,dog\n").unwrap();

        let err = read_items(&[InputSource::File(path)], ParseMode::Strict, true).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Parse error:"));
        assert!(message.contains("bad.csv"));
    }

    #[test]
    fn test_execute_writes_into_directory() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("words.csv");
        fs::write(&input, "japanese,english\n犬,dog\n").unwrap();

        let mut cli = args(&input.to_string_lossy());
        cli.output = Some(dir.path().to_path_buf());
        cli.format = Some(OutputFormat::Html);
        cli.title = Some("Unit: 1".into());
        cli.execute().unwrap();

        let written = fs::read_to_string(dir.path().join("Unit- 1.html")).unwrap();
        assert!(written.contains("（1）犬"));
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(ParseMode::from(Mode::Lenient), ParseMode::Lenient);
        assert_eq!(ParseMode::from(Mode::Strict), ParseMode::Strict);
    }
}
