use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2034, day = 24, tags = ["test", "auto"])]
struct AutoRegistered;

impl AocParser for AutoRegistered {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for AutoRegistered {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u32>().to_string())
    }
}

impl PartSolver<2> for AutoRegistered {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<u32>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2034, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn test_derived_solver_dispatches_parts() {
    let mut shared = AutoRegistered::parse("2\n3\n4").unwrap();
    assert_eq!(AutoRegistered::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(AutoRegistered::solve_part(&mut shared, 2).unwrap(), "24");
    assert!(matches!(
        AutoRegistered::solve_part(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn test_plugins_are_collected() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(2034, 24, "5\n6\n7")
        .expect("plugin was not registered");
    assert_eq!(solver.solve(1).unwrap().answer, "18");
    assert_eq!(solver.solve(2).unwrap().answer, "210");

    let mut solver = registry.create_solver(2034, 25, "abc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"auto"))
        .unwrap()
        .build();

    assert!(registry.contains(2034, 24));
    assert!(!registry.contains(2034, 25));
}
