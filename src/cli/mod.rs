//! CLI module - Command-line interface for anime-eda
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::ReportMode;

/// anime-eda - Anime dataset preprocessing and exploratory reports
#[derive(Parser)]
#[command(name = "anime-eda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean and re-encode the raw anime and rating tables
    #[command(alias = "prep")]
    Preprocess,

    /// Generate the exploratory report
    Report {
        /// Output format
        #[arg(long = "report", value_enum, default_value_t = ReportMode::Console)]
        report: ReportMode,

        /// Directory receiving HTML reports
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Anime table to analyze (raw or processed)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Optional rating table to summarize
        #[arg(long)]
        ratings: Option<PathBuf>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_defaults() {
        let cli = Cli::try_parse_from(["anime-eda", "report"]).unwrap();
        match cli.command {
            Commands::Report {
                report,
                output_dir,
                data,
                ratings,
            } => {
                assert_eq!(report, ReportMode::Console);
                assert!(output_dir.is_none());
                assert!(data.is_none());
                assert!(ratings.is_none());
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_report_flags() {
        let cli = Cli::try_parse_from([
            "anime-eda",
            "report",
            "--report",
            "both",
            "-o",
            "out",
            "--data",
            "data/raw/anime.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                report,
                output_dir,
                data,
                ..
            } => {
                assert_eq!(report, ReportMode::Both);
                assert_eq!(output_dir, Some(PathBuf::from("out")));
                assert_eq!(data, Some(PathBuf::from("data/raw/anime.csv")));
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_preprocess_takes_no_flags() {
        assert!(Cli::try_parse_from(["anime-eda", "preprocess"]).is_ok());
        assert!(Cli::try_parse_from(["anime-eda", "preprocess", "--data", "x"]).is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["anime-eda", "report", "--report", "pdf"]).is_err());
    }
}
