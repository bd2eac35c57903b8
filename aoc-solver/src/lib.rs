//! Advent of Code Solver Library
//!
//! Small framework the 2018 solutions are written against. A solver parses
//! its input once into shared data, then answers each part from that data.
//!
//! # Overview
//!
//! - [`AocParser`]: input → shared data
//! - [`PartSolver<N>`]: answer for part `N`
//! - [`Solver`]: runtime part dispatch, normally `#[derive(AocSolver)]`
//! - [`DynSolver`]: type-erased, timed access to a parsed instance
//! - [`SolverRegistry`]: year/day lookup, filled by hand or from plugins
//!   submitted with `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Checksum;
//!
//! impl AocParser for Checksum {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .split_whitespace()
//!             .map(|t| t.parse().map_err(|_| ParseError::InvalidFormat(format!("not a number: {t}"))))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Checksum {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Checksum {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Checksum>(2018, 2)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2018, 2, "1 2 3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
