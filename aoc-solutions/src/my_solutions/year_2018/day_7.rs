use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::step_scheduler::{DependencyGraph, StepId};

/// Elves available to assemble the sleigh
const WORKER_COUNT: usize = 5;
/// Fixed cost added to every step's letter position
const BASE_STEP_DURATION: u64 = 60;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 7, tags = ["2018", "graph"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = DependencyGraph;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let edges = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_edge(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if edges.is_empty() {
            return Err(ParseError::MissingData("no step instructions".to_string()));
        }
        Ok(DependencyGraph::from_edges(edges))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let order = shared.clone().linearize().map_err(SolveError::failed)?;
        Ok(order.iter().map(|step| step.letter()).collect())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let timeline = shared
            .clone()
            .simulate(WORKER_COUNT, BASE_STEP_DURATION)
            .map_err(SolveError::failed)?;
        Ok(timeline.total_time.to_string())
    }
}

/// `Step C must be finished before step A can begin.` → `(C, A)`
fn parse_edge(line: &str) -> Result<(StepId, StepId), anyhow::Error> {
    let rest = line
        .strip_prefix("Step ")
        .ok_or_else(|| anyhow!("expected line to start with 'Step '"))?;
    let (prerequisite, rest) = rest
        .split_once(" must be finished before step ")
        .ok_or_else(|| anyhow!("expected 'must be finished before step'"))?;
    let step = rest
        .strip_suffix(" can begin.")
        .ok_or_else(|| anyhow!("expected line to end with 'can begin.'"))?;

    Ok((parse_step(prerequisite)?, parse_step(step)?))
}

fn parse_step(token: &str) -> Result<StepId, anyhow::Error> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(StepId::new(letter)?),
        _ => Err(anyhow!("expected a single-letter step, got {:?}", token)),
    }
}
