//! Parsing strictness configuration
//!
//! Strictness has two independent axes: what happens when a required header
//! column is missing, and what happens to data rows that lack a prompt or an
//! answer. The two presets pair them the way existing call sites do.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Behaviour when the header lacks a `japanese` or `english` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPolicy {
    /// Fail the whole parse with [`Error::MissingRequiredColumn`]
    Require,
    /// Read the missing column as an empty string on every row
    Tolerate,
}

/// Behaviour for data rows with an empty prompt or answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Keep every non-blank row as-is
    KeepAll,
    /// Drop rows unless both `japanese` and `english` are non-empty
    DropIncomplete,
}

/// Named strictness presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParseMode {
    /// Require both columns, keep every row
    #[default]
    Strict,
    /// Tolerate missing columns, drop incomplete rows
    Lenient,
}

impl ParseMode {
    /// All presets, in display order
    pub const ALL: [ParseMode; 2] = [ParseMode::Strict, ParseMode::Lenient];

    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Strict => "strict",
            ParseMode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ParseMode::Strict),
            "lenient" => Ok(ParseMode::Lenient),
            other => Err(Error::Configuration(format!(
                "unknown parse mode: {other} (expected \"strict\" or \"lenient\")"
            ))),
        }
    }
}

/// Options controlling how CSV text becomes [`WordItem`](crate::WordItem)s
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub(crate) columns: ColumnPolicy,
    pub(crate) rows: RowPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl ParseOptions {
    /// Missing columns fail; every non-blank row is kept
    pub const fn strict() -> Self {
        Self {
            columns: ColumnPolicy::Require,
            rows: RowPolicy::KeepAll,
        }
    }

    /// Missing columns read as empty; incomplete rows are dropped
    pub const fn lenient() -> Self {
        Self {
            columns: ColumnPolicy::Tolerate,
            rows: RowPolicy::DropIncomplete,
        }
    }

    /// Create an options builder starting from the strict preset
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::default()
    }

    /// Column policy in effect
    pub fn column_policy(&self) -> ColumnPolicy {
        self.columns
    }

    /// Row policy in effect
    pub fn row_policy(&self) -> RowPolicy {
        self.rows
    }
}

impl From<ParseMode> for ParseOptions {
    fn from(mode: ParseMode) -> Self {
        match mode {
            ParseMode::Strict => Self::strict(),
            ParseMode::Lenient => Self::lenient(),
        }
    }
}

/// Fluent builder for [`ParseOptions`]
#[derive(Debug, Default)]
pub struct ParseOptionsBuilder {
    mode: Option<String>,
    columns: Option<ColumnPolicy>,
    rows: Option<RowPolicy>,
}

impl ParseOptionsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a named preset (`"strict"` or `"lenient"`)
    pub fn mode(mut self, name: impl Into<String>) -> Self {
        self.mode = Some(name.into());
        self
    }

    /// Override the column policy
    pub fn columns(mut self, policy: ColumnPolicy) -> Self {
        self.columns = Some(policy);
        self
    }

    /// Override the row policy
    pub fn rows(mut self, policy: RowPolicy) -> Self {
        self.rows = Some(policy);
        self
    }

    /// Build the options
    pub fn build(self) -> Result<ParseOptions, Error> {
        let mut options = match self.mode {
            Some(name) => ParseOptions::from(ParseMode::from_str(&name)?),
            None => ParseOptions::default(),
        };

        if let Some(columns) = self.columns {
            options.columns = columns;
        }

        if let Some(rows) = self.rows {
            options.rows = rows;
        }

        Ok(options)
    }
}
