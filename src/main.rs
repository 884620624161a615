use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use isd_birthday::dataset::{self, TestCase, END_MARKER};
use isd_birthday::{
    AttackError, Birthday, LogObserver, SdExperimentParams, SolutionSet, StopPolicy,
    SyndromeInstance,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the birthday attack on every case of a dataset file.
    Decode {
        dataset: PathBuf,
        /// Stop at the first solution instead of running the full budget.
        #[arg(long)]
        first_match: bool,
        /// Attempt cap for --first-match.
        #[arg(long, default_value_t = 10_000)]
        max_attempts: u64,
        /// Fixed RNG seed; drawn from the OS when absent.
        #[arg(long)]
        seed: Option<u64>,
        /// Cap on the computed exhaustive budget.
        #[arg(long)]
        attempt_limit: Option<u64>,
        /// Refuse cases whose candidate table exceeds this many patterns (0 disables).
        #[arg(long, default_value_t = 1 << 27)]
        max_table_entries: u64,
    },
    /// Print a random systematic instance in dataset format.
    Generate {
        n: usize,
        seed: u64,
        #[arg(long, default_value = "1")]
        name: String,
    },
}

fn print_solutions(instance: &SyndromeInstance, solutions: &SolutionSet) {
    println!("\nFound {} unique solutions:", solutions.len());
    for (i, e) in solutions.iter().enumerate() {
        println!("Solution {}: {}", i + 1, e.to_bit_string(" "));
        if instance.syndrome_of(e) != *instance.s() {
            println!("Warning: Invalid solution detected!");
        }
    }
}

fn run_case(attack: &Birthday, policy: StopPolicy, case: &TestCase) -> Result<()> {
    let instance = case.instance()?;
    match attack.run(&instance, policy, &mut LogObserver) {
        Ok(solutions) if solutions.is_empty() && matches!(policy, StopPolicy::FirstMatch { .. }) => {
            println!("No solution found.");
            Ok(())
        }
        Ok(solutions) => {
            print_solutions(&instance, &solutions);
            Ok(())
        }
        Err(err @ AttackError::TableTooLarge { .. }) => {
            println!("Skipped: {err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn decode(
    path: PathBuf,
    policy: StopPolicy,
    seed: Option<u64>,
    attempt_limit: Option<u64>,
    max_table_entries: u64,
) -> Result<()> {
    let cases = dataset::read_dataset(&path)
        .with_context(|| format!("failed to read test cases from {}", path.display()))?;
    let mut attack = Birthday::new(seed)
        .with_max_table_entries((max_table_entries > 0).then_some(max_table_entries));
    if let Some(limit) = attempt_limit {
        attack = attack.with_attempt_limit(limit);
    }

    for case in &cases {
        println!("\n=== Running Test: {} ===", case.name);
        if let Err(err) = run_case(&attack, policy, case) {
            println!("Error: {err:#}");
        }
    }
    Ok(())
}

fn generate(n: usize, seed: u64, name: &str) -> Result<()> {
    let instance = SdExperimentParams::with_numeric_seed(n, seed).generate()?;
    print!("{}", dataset::format_case(name, &instance));
    println!("{END_MARKER}");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Decode {
            dataset,
            first_match,
            max_attempts,
            seed,
            attempt_limit,
            max_table_entries,
        } => {
            let policy = if first_match {
                StopPolicy::FirstMatch { max_attempts }
            } else {
                StopPolicy::Exhaustive
            };
            decode(dataset, policy, seed, attempt_limit, max_table_entries)
        }
        Command::Generate { n, seed, name } => generate(n, seed, &name),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(args) {
        eprintln!("error: {err:?}");
        process::exit(1)
    }
}
