use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use worker_generator::pipeline::{self, Inputs};
use worker_generator::{GenerateError, GeneratorSeeds};

#[derive(Parser, Debug)]
#[command(name = "worker_generator")]
#[command(about = "Generate a tiered population of random workers as |-delimited lines")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory containing male_names.txt, female_names.txt and last_names.txt
    #[arg(short, long, default_value = ".")]
    names_dir: PathBuf,

    /// JSON file overriding the generation constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GenerateError> {
    // Progress goes to stderr; stdout carries the workers
    let log = |msg: String| {
        if !args.quiet {
            eprintln!("{}", msg);
        }
    };

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let seeds = GeneratorSeeds::from_master(seed);

    log(format!("Loading names from {}...", args.names_dir.display()));
    let inputs = Inputs::load(&args.names_dir, args.config.as_deref())?;
    log(format!(
        "Loaded {} male, {} female and {} last names",
        inputs.names.male.len(),
        inputs.names.female.len(),
        inputs.names.last.len()
    ));

    log(format!(
        "Generating {} candidates with seed {} (mu {:.1}, sigma {:.1})...",
        inputs.config.iters, seed, inputs.config.mu, inputs.config.sigma
    ));
    let stdout = io::stdout();
    let population = pipeline::run(&inputs, &seeds, stdout.lock())?;

    for tier in &population.tiers {
        let note = if tier.is_short() { " (short)" } else { "" };
        log(format!(
            "  {}: {}/{} selected from {} eligible{}",
            tier.name, tier.selected, tier.limit, tier.eligible, note
        ));
    }
    log(format!("Wrote {} workers", population.len()));

    Ok(())
}
