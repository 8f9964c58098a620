//! Command line argument parsing for the Phalanx CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Phalanx - merge several text analyzers into one token stream
#[derive(Parser, Debug, Clone)]
#[command(name = "phalanx")]
#[command(about = "Run text analyzers, including combo analyzers, over input text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PhalanxArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PhalanxArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze text with a named analyzer
    Analyze(AnalyzeArgs),

    /// List the registered analyzers
    List(ListArgs),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Analysis settings file (JSON)
    #[arg(short, long, value_name = "SETTINGS_FILE", env = "PHALANX_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Name of the analyzer to run
    #[arg(short, long, default_value = "standard")]
    pub analyzer: String,

    /// Text to analyze
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Analyze every line of this file instead
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for listing analyzers
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Analysis settings file (JSON)
    #[arg(short, long, value_name = "SETTINGS_FILE", env = "PHALANX_SETTINGS")]
    pub settings: Option<PathBuf>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_args() {
        let args = PhalanxArgs::try_parse_from([
            "phalanx",
            "analyze",
            "--settings",
            "/etc/phalanx/settings.json",
            "--analyzer",
            "combined",
            "just a little test",
        ])
        .unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(
                analyze_args.settings,
                Some(PathBuf::from("/etc/phalanx/settings.json"))
            );
            assert_eq!(analyze_args.analyzer, "combined");
            assert_eq!(analyze_args.text.as_deref(), Some("just a little test"));
            assert!(analyze_args.input.is_none());
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_text_conflicts_with_input() {
        let result = PhalanxArgs::try_parse_from([
            "phalanx", "analyze", "--input", "lines.txt", "some text",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_analyzer() {
        let args = PhalanxArgs::try_parse_from(["phalanx", "analyze", "text"]).unwrap();

        if let Command::Analyze(analyze_args) = args.command {
            assert_eq!(analyze_args.analyzer, "standard");
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = PhalanxArgs::try_parse_from(["phalanx", "list"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = PhalanxArgs::try_parse_from(["phalanx", "-vv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = PhalanxArgs::try_parse_from(["phalanx", "-vvv", "list"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = PhalanxArgs::try_parse_from(["phalanx", "--quiet", "list"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            PhalanxArgs::try_parse_from(["phalanx", "--format", "json", "--pretty", "list"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
