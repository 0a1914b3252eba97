//! Command-line interface for the notice parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::error::Result;
use crate::output::{render, OutputFormat};
use crate::parser::parse_document;
use crate::record::prepare_records;

/// Notice Parser - Turn maintenance report text into structured notices.
#[derive(Parser)]
#[command(name = "notice-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an extracted report text file and print its notices.
    Parse {
        /// UTF-8 text file extracted from a notice report
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Print storage-ready records instead of parsed notices
        #[arg(short, long)]
        records: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            format,
            records,
        } => parse_command(&file, format, records),
    }
}

/// Execute the parse command.
///
/// Rendered output goes to stdout and the summary to stderr, so the output
/// can be piped.
fn parse_command(file: &Path, format: OutputFormat, records: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)?;
    let document = parse_document(&text);

    let rendered = if records {
        render(&prepare_records(&document.notices), format)?
    } else {
        render(&document.notices, format)?
    };
    print!("{rendered}");

    for warning in &document.warnings {
        eprintln!("  {} {warning}", style("warning:").for_stderr().yellow());
    }
    eprintln!(
        "{} {} notices, {} warnings from {}",
        style("Parsed").for_stderr().green().bold(),
        style(document.notices.len()).for_stderr().cyan(),
        style(document.warnings.len()).for_stderr().yellow(),
        file.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["notice-parser", "parse", "report.txt"]);

        let Commands::Parse {
            file,
            format,
            records,
        } = cli.command;
        assert_eq!(file, PathBuf::from("report.txt"));
        assert_eq!(format, OutputFormat::Yaml);
        assert!(!records);
    }

    #[test]
    fn test_cli_parse_json_records() {
        let cli = Cli::parse_from([
            "notice-parser",
            "parse",
            "report.txt",
            "--format",
            "json",
            "--records",
        ]);

        let Commands::Parse {
            format, records, ..
        } = cli.command;
        assert_eq!(format, OutputFormat::Json);
        assert!(records);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["notice-parser", "parse", "r.txt", "--format", "xml"]);
        assert!(result.is_err());
    }
}
