//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Tarnish: synthetic data-quality corruption for tabular test fixtures
#[derive(Parser)]
#[command(name = "tarnish")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Corrupt every .csv file in a folder
    Batch {
        /// Folder containing clean CSV files
        #[arg(value_name = "INPUT_DIR", default_value = "clean_datasets")]
        input_dir: PathBuf,

        /// Folder for <name>_corrupted.csv outputs (created if missing)
        #[arg(value_name = "OUTPUT_DIR", default_value = "corrupted_datasets")]
        output_dir: PathBuf,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Field delimiter for input and output
        #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,

        /// Write a JSON summary of every corrupted file
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },

    /// Corrupt a single CSV file
    File {
        /// Path to the clean CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file stem>_corrupted.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Field delimiter for input and output
        #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,

        /// Print the corruption report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a single-byte delimiter; `\t` and `tab` mean a tab.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!(
            "Invalid delimiter: {:?}. Use a single ASCII character.",
            s
        )),
    }
}
