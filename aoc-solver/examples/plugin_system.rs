//! Example demonstrating the plugin system and builder pattern
//!
//! Two solvers register themselves through `inventory`; the registry is then
//! built from the plugins whose tags match, and each part is run through the
//! type-erased `DynSolver` interface.
//!
//! Run with: cargo run --example plugin_system

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

/// Frequency drift: sum of signed deltas, then the first repeated total
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 1, tags = ["demo", "easy"])]
pub struct Drift;

impl AocParser for Drift {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|t| {
                t.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("expected integer: {t}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Drift {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Drift {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.is_empty() {
            return Ok("0".to_string());
        }
        let mut seen = std::collections::HashSet::from([0i64]);
        let mut total = 0i64;
        for delta in shared.iter().cycle() {
            total += delta;
            if !seen.insert(total) {
                break;
            }
        }
        Ok(total.to_string())
    }
}

/// Word lengths: longest word in the input
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2018, day = 2, tags = ["demo", "strings"])]
pub struct Longest;

impl AocParser for Longest {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for Longest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .max_by_key(|w| w.len())
            .copied()
            .unwrap_or_default()
            .to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Registered plugins ===");
    for plugin in aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>() {
        println!("  {}/{:02} tags={:?}", plugin.year, plugin.day, plugin.tags);
    }

    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))?
        .build();
    println!("\n=== Registry filtered by tag \"easy\": {} solver(s) ===", registry.len());

    let mut solver = registry.create_solver(2018, 1, "+3 +3 +4 -2 -4")?;
    println!("Parsed in {}", solver.parse_duration());
    for part in 1..=solver.parts() {
        let result = solver.solve(part)?;
        println!("  Part {}: {} ({})", part, result.answer, result.elapsed);
    }

    match registry.create_solver(2018, 2, "some words") {
        Err(e) => println!("\nDay 2 was filtered out: {e}"),
        Ok(_) => println!("\nDay 2 unexpectedly registered"),
    }

    Ok(())
}
