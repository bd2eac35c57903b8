//! Advent of Code 2018 puzzle solutions with automatic registration
//!
//! Each solution uses the `AutoRegisterSolver` derive macro, so linking this
//! crate is enough for `SolverRegistryBuilder::register_all_plugins` to see
//! it. The reusable algorithms live under [`utils`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
