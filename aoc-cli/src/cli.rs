//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Verbosity of the diagnostic log on stderr
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Advent of Code 2018 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2018 solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` input files
    /// [env: AOC_INPUT_DIR] [default: inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Read the input from this file instead (needs --year and --day)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level for diagnostics on stderr [env: AOC_LOG] [default: warn]
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}
