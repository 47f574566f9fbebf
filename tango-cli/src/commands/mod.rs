//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod print;
pub mod validate;

use crate::output::OutputFormat;
use tango_core::ParseMode;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build printable word-test sheets from CSV word lists
    Print(print::PrintArgs),

    /// Check a CSV word list and report skipped rows
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available parse modes
    Modes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Print(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Render the listing as text
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in OutputFormat::ALL {
                    out.push_str(&format!("  {:<10} {}\n", format.as_str(), format.description()));
                }
            }
            ListCommands::Modes => {
                out.push_str("Available parse modes:\n");
                for mode in ParseMode::ALL {
                    let description = match mode {
                        ParseMode::Strict => {
                            "Require japanese/english columns, keep every row"
                        }
                        ParseMode::Lenient => {
                            "Tolerate missing columns, drop rows without a prompt or answer"
                        }
                    };
                    out.push_str(&format!("  {:<10} {}\n", mode.as_str(), description));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let print_cmd = Commands::Print(print::PrintArgs {
            input: vec!["words.csv".to_string()],
            output: None,
            format: Some(OutputFormat::Html),
            title: None,
            default_chapter: None,
            shuffle: false,
            seed: None,
            answer_key: false,
            mode: None,
            config: None,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", print_cmd);
        assert!(debug_str.contains("Print"));
        assert!(debug_str.contains("words.csv"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_list_formats_render() {
        let listing = ListCommands::Formats.render();
        for format in OutputFormat::ALL {
            assert!(listing.contains(format.as_str()));
        }
    }

    #[test]
    fn test_list_modes_render() {
        let listing = ListCommands::Modes.render();
        assert!(listing.contains("strict"));
        assert!(listing.contains("lenient"));
    }

    #[test]
    fn test_list_executes() {
        let cmd = Commands::List {
            subcommand: ListCommands::Modes,
        };
        assert!(cmd.execute().is_ok());
    }
}
