//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

/// Where a word list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (`-`)
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole source as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs, treating `-` as standard input
pub fn resolve_sources(inputs: &[String]) -> Result<Vec<InputSource>> {
    if inputs.len() == 1 && inputs[0] == "-" {
        return Ok(vec![InputSource::Stdin]);
    }

    let patterns: Vec<String> = inputs.iter().filter(|p| *p != "-").cloned().collect();
    if patterns.len() != inputs.len() {
        anyhow::bail!("Standard input (-) cannot be combined with file inputs");
    }

    Ok(resolve_patterns(&patterns)?
        .into_iter()
        .map(InputSource::File)
        .collect())
}
