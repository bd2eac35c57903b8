use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::license_tree::{Node, decode, indexed_value, metadata_sum};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2018, day = 8, tags = ["2018", "tree"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Node;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let values = input
            .split_whitespace()
            .enumerate()
            .map(|(token_idx, token)| {
                <i64 as FromStr>::from_str(token)
                    .map_err(|e| anyhow!("(token {}) {:?}: {}", token_idx + 1, token, e))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if values.is_empty() {
            return Err(ParseError::MissingData("no license numbers".to_string()));
        }

        let (root, consumed) =
            decode(&values).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if consumed != values.len() {
            return Err(ParseError::InvalidFormat(format!(
                "root node ends at value {} but input has {} values",
                consumed,
                values.len()
            )));
        }
        Ok(root)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(metadata_sum(shared).map_err(SolveError::failed)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(indexed_value(shared).map_err(SolveError::failed)?.to_string())
    }
}
