//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parsing half of a solver.
///
/// `SharedData` is produced once per input and handed mutably to every part,
/// so later parts can reuse work done by earlier ones.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Frequencies;
///
/// impl AocParser for Frequencies {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Frequencies::parse("+1\n-2\n+3").unwrap(), vec![1, -2, 3]);
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts want to share.
    ///
    /// The lifetime lets implementations borrow from the raw input when no
    /// transformation is needed.
    type SharedData<'a>;

    /// Parse the raw puzzle input.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implement once per part and let `#[derive(AocSolver)]` generate the
/// [`Solver`] dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Frequencies;
///
/// impl AocParser for Frequencies {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split_whitespace()
///             .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(t.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Frequencies {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Frequencies::parse("+1 +1 -2").unwrap();
/// assert_eq!(<Frequencies as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part using the shared data.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver: a parser plus a runtime dispatch over its parts.
///
/// Usually derived:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Words;
///
/// impl AocParser for Words {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.split_whitespace().collect())
///     }
/// }
///
/// impl PartSolver<1> for Words {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Words {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.concat())
///     }
/// }
///
/// let mut shared = Words::parse("ab cd").unwrap();
/// assert_eq!(Words::solve_part(&mut shared, 1).unwrap(), "2");
/// assert_eq!(Words::solve_part(&mut shared, 2).unwrap(), "abcd");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartOutOfRange)` - `part` is not in `1..=PARTS`
    /// * `Err(SolveError::SolveFailed)` - The algorithm rejected the input
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point shared by every [`Solver`].
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
