//! Puzzle input lookup on the local filesystem

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory of puzzle inputs, optionally overridden by a single file
///
/// Layout: `{dir}/{year}_day{day:02}.txt`
pub struct InputStore {
    dir: PathBuf,
    override_file: Option<PathBuf>,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            override_file: None,
        }
    }

    /// Serve every lookup from `file` instead of the directory
    pub fn with_override(mut self, file: PathBuf) -> Self {
        self.override_file = Some(file);
        self
    }

    /// Path the input for year/day is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some(file) => file.clone(),
            None => self.dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if an input file exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { path },
            _ => InputError::Read { path, source },
        })
    }
}
