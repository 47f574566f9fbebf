//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::output::DEFAULT_TITLE;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to set your sheet title and defaults");
        println!("2. Use it when printing:");
        println!(
            "   tango print -i words.csv -f html -o . --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# tango configuration
#
# Command-line flags take precedence over values in this file.

[sheet]
# Printed at the top of every sheet and used for saved file names
title = "{DEFAULT_TITLE}"

# Label for words whose chapter cell is empty.
# When this is empty too, "(チャプター未設定)" is printed.
default_chapter = ""

# Print each answer under its prompt
answer_key = false

# Shuffle words within each chapter
shuffle = false

[parsing]
# "strict":  require "japanese" and "english" header columns, keep every row
# "lenient": tolerate missing columns, drop rows without a prompt or answer
mode = "strict"

[output]
# One of "text", "json", "markdown", "html"
default_format = "html"

# Pretty print JSON output
pretty_json = true
"#
        )
    }
}
