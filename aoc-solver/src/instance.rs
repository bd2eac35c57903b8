//! Parsed solver state behind a type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::SolverExt;
use chrono::{TimeDelta, Utc};

/// Answer to one part and the wall-clock time spent producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub answer: String,
    pub elapsed: TimeDelta,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// Parsed input for one year/day, ready to answer any of its parts.
///
/// Parsing happens exactly once, in [`SolverInstance::new`]; every call to
/// [`DynSolver::solve`] reuses the same shared data, so a part may leave
/// results behind for a later one.
pub struct SolverInstance<'a, S: SolverExt> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: SolverExt> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_duration) = timed(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_duration,
        })
    }
}

/// Type-erased interface over any [`SolverInstance`]
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} ({})", part, result.answer, result.elapsed);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part` (1-based) against the shared data
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver answers
    fn parts(&self) -> u8;

    /// Time spent in [`AocParser::parse`](crate::AocParser::parse)
    fn parse_duration(&self) -> TimeDelta;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, elapsed) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            elapsed,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }
}
