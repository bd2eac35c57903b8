//! Dependency ordering and timed scheduling of lettered steps
//!
//! Steps are single uppercase letters. Each edge `(X, Y)` says step `X` must
//! be finished before step `Y` can begin. Whenever several steps could run,
//! the alphabetically first one wins.
//!
//! - [`linearize`]: order with a single worker and no durations
//! - [`schedule`] / [`simulate`]: several workers, each step taking
//!   `base_duration + letter position` time units
//!
//! A graph whose remaining steps all wait on each other is reported as
//! [`ScheduleError::CyclicDependency`] instead of spinning forever.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::step_scheduler::{linearize, schedule, StepId};
//!
//! let edge = |a, b| (StepId::new(a).unwrap(), StepId::new(b).unwrap());
//! let edges = [
//!     edge('C', 'A'), edge('C', 'F'), edge('A', 'B'), edge('A', 'D'),
//!     edge('B', 'E'), edge('D', 'E'), edge('F', 'E'),
//! ];
//!
//! let order: String = linearize(edges).unwrap().iter().map(|s| s.letter()).collect();
//! assert_eq!(order, "CABDFE");
//! assert_eq!(schedule(edges, 2, 0).unwrap(), 15);
//! ```

mod graph;
mod simulation;
mod step;

pub use graph::{DependencyGraph, ScheduleError, linearize};
pub use simulation::{Assignment, Timeline, schedule, simulate};
pub use step::{InvalidStepId, StepId};
