//! AOC CLI - Command-line interface for running Advent of Code 2018 solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing::info;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    logging::init_logging(args.log_level)?;

    let config = Config::from_args(args)?;
    info!(input_dir = %config.input_dir.display(), "configuration resolved");

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if !config.quiet {
        let missing: Vec<_> = work_items
            .iter()
            .filter(|w| !executor.inputs().contains(w.year, w.day))
            .collect();
        if !missing.is_empty() {
            println!("Missing {} input file(s):", missing.len());
            for w in &missing {
                println!("  - {}", executor.inputs().input_path(w.year, w.day).display());
            }
        }
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
