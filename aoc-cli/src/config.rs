//! Configuration resolution from CLI args and environment

use crate::cli::{Args, LogLevel};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is not given
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory holding the input files
    pub input_dir: PathBuf,
    /// Single input file replacing the directory lookup
    pub input_file: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
    pub log_level: Option<LogLevel>,
}

impl Config {
    /// Build config from CLI args, falling back to the process environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var(INPUT_DIR_ENV).ok())
    }

    /// Build config from CLI args and an explicit `AOC_INPUT_DIR` value
    pub fn resolve(args: Args, env_input_dir: Option<String>) -> Result<Self, CliError> {
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "--input reads a single puzzle and needs both --year and --day".to_string(),
            ));
        }

        let input_dir = args
            .input_dir
            .or_else(|| env_input_dir.filter(|s| !s.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&input_dir),
            input_file: args.input.map(|path| expand_tilde(&path)),
            quiet: args.quiet,
            log_level: args.log_level,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(args(&[]), None).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
        assert_eq!(config.year_filter, None);
        assert!(config.tags.is_empty());
        assert!(!config.quiet);
        assert!(config.input_file.is_none());
    }

    #[test]
    fn test_flag_beats_environment() {
        let config = Config::resolve(args(&["--input-dir", "flag"]), Some("env".into())).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("flag"));

        let config = Config::resolve(args(&[]), Some("env".into())).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("env"));

        let config = Config::resolve(args(&[]), Some(String::new())).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
    }

    #[test]
    fn test_filters_and_tags() {
        let config =
            Config::resolve(args(&["-y", "2018", "-d", "7", "-p", "2", "-t", "2018,graph"]), None)
                .unwrap();
        assert_eq!(config.year_filter, Some(2018));
        assert_eq!(config.day_filter, Some(7));
        assert_eq!(config.part_filter, Some(2));
        assert_eq!(config.tags, vec!["2018".to_string(), "graph".to_string()]);
    }

    #[test]
    fn test_input_file_requires_year_and_day() {
        let result = Config::resolve(args(&["--input", "day8.txt", "--day", "8"]), None);
        assert!(matches!(result, Err(CliError::Config(_))));

        let config =
            Config::resolve(args(&["--input", "day8.txt", "-y", "2018", "-d", "8"]), None).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("day8.txt")));
    }

    #[test]
    fn test_out_of_range_day_is_rejected_by_clap() {
        let result = Args::try_parse_from(["aoc", "--day", "26"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("relative/dir")), PathBuf::from("relative/dir"));
        assert_eq!(expand_tilde(Path::new("/abs/~/dir")), PathBuf::from("/abs/~/dir"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
