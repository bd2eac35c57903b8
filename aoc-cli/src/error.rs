//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid flag combination or unresolvable setting
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Errors locating or reading a puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file where one was expected
    #[error("no input file at {}", .path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
