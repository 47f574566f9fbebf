//! Configuration module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tango_core::ParseMode;

use crate::error::CliError;
use crate::output::{OutputFormat, DEFAULT_TITLE};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Sheet configuration
    #[serde(default)]
    pub sheet: SheetConfig,

    /// Parsing configuration
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)).into())
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Sheet-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    /// Title printed on every sheet
    pub title: String,

    /// Chapter label for items without one
    pub default_chapter: String,

    /// Reveal answers under each prompt
    pub answer_key: bool,

    /// Shuffle items within each chapter
    pub shuffle: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            default_chapter: String::new(),
            answer_key: false,
            shuffle: false,
        }
    }
}

/// Parsing-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ParsingConfig {
    /// Strictness preset
    pub mode: ParseMode,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.sheet.title, DEFAULT_TITLE);
        assert_eq!(config.parsing.mode, ParseMode::Strict);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[sheet]
title = "期末テスト"
shuffle = true

[parsing]
mode = "lenient"

[output]
default_format = "html"
"#,
        )
        .unwrap();

        assert_eq!(config.sheet.title, "期末テスト");
        assert!(config.sheet.shuffle);
        assert!(!config.sheet.answer_key);
        assert_eq!(config.sheet.default_chapter, "");
        assert_eq!(config.parsing.mode, ParseMode::Lenient);
        assert_eq!(config.output.default_format, OutputFormat::Html);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(CliConfig::from_toml("[parsing]\nmode = \"loose\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[sheet]\ndefault_chapter = \"Unit 0\"\n").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.sheet.default_chapter, "Unit 0");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/tango.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }
}
