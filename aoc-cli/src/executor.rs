//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::InputError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Set on the first part run for a year/day, where parsing happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected year/day in order, one part after another
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        let mut inputs = InputStore::new(config.input_dir.clone());
        if let Some(file) = &config.input_file {
            inputs = inputs.with_override(file.clone());
        }

        Self {
            registry,
            inputs,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each result to `on_result` as it is produced
    ///
    /// Failures are reported as results, never as an early return, so one bad
    /// input does not stop the remaining puzzles.
    pub fn execute(&self, mut on_result: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            self.run_work_item(&work, &mut on_result);
        }
    }

    fn run_work_item(&self, work: &WorkItem, on_result: &mut impl FnMut(SolverResult)) {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.read(year, day) {
            Ok(input) => input,
            Err(e) => {
                warn!(year, day, error = %e, "input unavailable");
                let parse_error = input_parse_error(&e);
                for part in work.parts.clone() {
                    on_result(failed_result(work, part, parse_error.clone()));
                }
                return;
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                warn!(year, day, error = %e, "solver could not be created");
                let parse_error = match e {
                    SolverError::ParseError(pe) => pe,
                    other => ParseError::Other(other.to_string()),
                };
                for part in work.parts.clone() {
                    on_result(failed_result(work, part, parse_error.clone()));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        debug!(year, day, parse = %solver.parse_duration(), "input parsed");

        for part in work.parts.clone() {
            let result = solve_part(year, day, part, &mut *solver, parse_duration.take());
            if let Err(e) = &result.answer {
                info!(year, day, part, error = %e, "part failed");
            }
            on_result(result);
        }
    }
}

fn input_parse_error(error: &InputError) -> ParseError {
    match error {
        InputError::Missing { .. } => ParseError::MissingData(error.to_string()),
        InputError::Read { .. } => ParseError::Other(error.to_string()),
    }
}

fn failed_result(work: &WorkItem, part: u8, error: ParseError) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer: Err(SolverError::ParseError(error)),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => (Ok(result.answer), result.elapsed),
        Err(e) => (Err(e.into()), TimeDelta::zero()),
    };

    SolverResult {
        year,
        day,
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverRegistryBuilder;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const DAY_7_SAMPLE: &str = "\
Step C must be finished before step A can begin.
Step C must be finished before step F can begin.
Step A must be finished before step B can begin.
Step A must be finished before step D can begin.
Step B must be finished before step E can begin.
Step D must be finished before step E can begin.
Step F must be finished before step E can begin.
";

    const DAY_8_SAMPLE: &str = "2 3 0 3 10 11 12 1 1 0 1 99 2 1 1 2\n";

    fn config(dir: &Path) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: dir.to_path_buf(),
            input_file: None,
            quiet: true,
            log_level: None,
        }
    }

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == 2018)
            .unwrap()
            .build()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(|r| results.push(r));
        results
    }

    #[test]
    fn test_runs_all_parts_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2018_day07.txt"), DAY_7_SAMPLE).unwrap();
        fs::write(temp.path().join("2018_day08.txt"), DAY_8_SAMPLE).unwrap();

        let executor = Executor::new(registry(), &config(temp.path()));
        let results = run(&executor);

        let keys: Vec<_> = results.iter().map(|r| (r.day, r.part)).collect();
        assert_eq!(keys, vec![(7, 1), (7, 2), (8, 1), (8, 2)]);

        let answers: Vec<_> = results.iter().map(|r| r.answer.as_deref().unwrap()).collect();
        assert_eq!(answers, vec!["CABDFE", "253", "138", "66"]);
    }

    #[test]
    fn test_parse_duration_only_on_first_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2018_day08.txt"), DAY_8_SAMPLE).unwrap();

        let mut cfg = config(temp.path());
        cfg.day_filter = Some(8);
        let results = run(&Executor::new(registry(), &cfg));

        assert_eq!(results.len(), 2);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_fails_each_part_without_stopping() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2018_day08.txt"), DAY_8_SAMPLE).unwrap();

        let results = run(&Executor::new(registry(), &config(temp.path())));

        assert_eq!(results.len(), 4);
        for r in results.iter().filter(|r| r.day == 7) {
            assert!(matches!(
                r.answer,
                Err(SolverError::ParseError(ParseError::MissingData(_)))
            ));
        }
        assert!(results.iter().filter(|r| r.day == 8).all(|r| r.answer.is_ok()));
    }

    #[test]
    fn test_malformed_input_fails_each_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2018_day08.txt"), "1 1 0").unwrap();

        let mut cfg = config(temp.path());
        cfg.day_filter = Some(8);
        let results = run(&Executor::new(registry(), &cfg));

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(
            r.answer,
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        )));
    }

    #[test]
    fn test_cyclic_graph_is_a_solve_failure() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("2018_day07.txt"),
            "Step A must be finished before step B can begin.\n\
             Step B must be finished before step A can begin.\n",
        )
        .unwrap();

        let mut cfg = config(temp.path());
        cfg.day_filter = Some(7);
        let results = run(&Executor::new(registry(), &cfg));

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(r.answer, Err(SolverError::SolveError(_)))));
    }

    #[test]
    fn test_part_filter() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        cfg.part_filter = Some(2);

        let items = Executor::new(registry(), &cfg).collect_work_items();
        assert!(!items.is_empty());
        assert!(items.iter().all(|w| w.parts == (2..=2)));

        cfg.part_filter = Some(3);
        assert!(Executor::new(registry(), &cfg).collect_work_items().is_empty());
    }

    #[test]
    fn test_year_and_day_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        cfg.year_filter = Some(2018);
        cfg.day_filter = Some(7);

        let items = Executor::new(registry(), &cfg).collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                year: 2018,
                day: 7,
                parts: 1..=2
            }]
        );

        cfg.year_filter = Some(2019);
        assert!(Executor::new(registry(), &cfg).collect_work_items().is_empty());
    }

    #[test]
    fn test_input_file_override() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("mine.txt");
        fs::write(&file, "0 3 1 2 3").unwrap();

        let mut cfg = config(&temp.path().join("nowhere"));
        cfg.year_filter = Some(2018);
        cfg.day_filter = Some(8);
        cfg.input_file = Some(file);

        let results = run(&Executor::new(registry(), &cfg));
        let answers: Vec<_> = results.iter().map(|r| r.answer.as_deref().unwrap()).collect();
        assert_eq!(answers, vec!["6", "6"]);
    }
}
