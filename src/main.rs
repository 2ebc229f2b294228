//! CLI entry point for the crossing solver.
//!
//! Usage:
//!   crossing-solver solve <puzzle-file> [--forbidden <file>] [--actions] [--json]
//!   crossing-solver gen <classic|alphabet|pirates> [--out-dir <dir>]
//!
//! `solve` exits 0 when a path is found, 1 when the puzzle has no
//! solution (a normal outcome), and 2 on configuration or load errors.
//! Logs go to stderr under `RUST_LOG` control; stdout carries only the
//! report.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crossing_solver::{datagen, loader, moves};
use crossing_solver::{Move, Puzzle, Solution};

#[derive(Parser)]
#[command(name = "crossing-solver")]
#[command(about = "Shortest-path solver for river-crossing puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and report the shortest crossing sequence
    Solve {
        /// Path to the puzzle definition file
        #[arg(value_name = "PUZZLE")]
        puzzle: PathBuf,

        /// Path to a forbidden-states file
        #[arg(long, value_name = "FILE")]
        forbidden: Option<PathBuf>,

        /// Print the per-crossing action list
        #[arg(long)]
        actions: bool,

        /// Emit the result as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Write one of the bundled example datasets
    Gen {
        /// Dataset to generate
        #[arg(value_enum)]
        dataset: DatasetName,

        /// Directory receiving the generated files
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DatasetName {
    Classic,
    Alphabet,
    Pirates,
}

/// JSON document printed by `solve --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    found: bool,
    crossings: usize,
    path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<String>>,
    states_expanded: usize,
    states_enqueued: usize,
    time_elapsed_ms: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Solve {
            puzzle,
            forbidden,
            actions,
            json,
        } => run_solve(&puzzle, forbidden.as_deref(), actions, json),
        Commands::Gen { dataset, out_dir } => run_gen(dataset, &out_dir),
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run_solve(
    path: &Path,
    forbidden: Option<&Path>,
    actions: bool,
    json: bool,
) -> Result<ExitCode, Box<dyn Error>> {
    let mut puzzle = loader::read_puzzle(path)?;
    if let Some(file) = forbidden {
        puzzle.add_forbidden(loader::read_forbidden(file)?)?;
    }

    let solution = puzzle.solve()?;
    let moves = moves::from_path(&solution.path);

    if json {
        let roster = puzzle.roster();
        let output = SolveOutput {
            found: solution.found,
            crossings: solution.crossings(),
            path: solution.path.iter().map(|s| s.to_string()).collect(),
            actions: actions.then(|| moves.iter().map(|m| m.describe(roster)).collect()),
            states_expanded: solution.stats.states_expanded,
            states_enqueued: solution.stats.states_enqueued,
            time_elapsed_ms: solution.stats.time_elapsed_ms,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&puzzle, &solution, &moves, actions);
    }

    Ok(if solution.found {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Plain-text report: source/target header, optional action list, then
/// the path and search statistics.
fn print_report(puzzle: &Puzzle, solution: &Solution, moves: &[Move], actions: bool) {
    let roster = puzzle.roster();
    let (Some(source), Some(target)) = (puzzle.source(), puzzle.target()) else {
        return; // both endpoints are set once solve() has run
    };

    println!("source state: {}", roster.describe(source));
    println!("target state: {}", roster.describe(target));

    if !solution.found {
        println!(
            "no path from {} to {} found",
            roster.describe(source),
            roster.describe(target)
        );
        return;
    }

    if actions {
        println!("actions:");
        for mv in moves {
            println!("  {}", mv.describe(roster));
        }
    }

    println!("path found with {} crossings:", solution.crossings());
    for state in &solution.path {
        println!("  {}", roster.describe(state));
    }
    println!(
        "explored {} states in {} ms",
        solution.stats.states_expanded, solution.stats.time_elapsed_ms
    );
}

fn run_gen(dataset: DatasetName, out_dir: &Path) -> Result<ExitCode, Box<dyn Error>> {
    let (name, data) = match dataset {
        DatasetName::Classic => ("classic", datagen::classic()),
        DatasetName::Alphabet => ("alphabet", datagen::alphabet()),
        DatasetName::Pirates => ("pirates", datagen::pirates()),
    };

    fs::create_dir_all(out_dir)?;
    let puzzle_path = out_dir.join(format!("{name}.puzzle"));
    let forbidden_path = out_dir.join(format!("{name}.forbidden"));
    fs::write(&puzzle_path, &data.puzzle)?;
    fs::write(&forbidden_path, &data.forbidden)?;

    info!(dataset = name, dir = %out_dir.display(), "generated dataset files");
    println!("wrote {}", puzzle_path.display());
    println!("wrote {}", forbidden_path.display());
    Ok(ExitCode::SUCCESS)
}
