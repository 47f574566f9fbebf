//! Tango CLI library
//!
//! This library provides the command-line host for the tango word-test
//! generator: it reads CSV word lists, runs them through `tango-core`, and
//! renders the resulting pages.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
