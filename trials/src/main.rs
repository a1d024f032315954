//! gridstar-trials: A* search over random grids at increasing difficulty.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;

use trials_lib::{DriverOptions, TrialDriver, default_tiers, load_tiers, select_tiers};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the grid generator; the same seed prints the same run
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Trials per tier, overriding the tier definitions
    #[arg(short, long)]
    trials: Option<usize>,

    /// Only run the named tier (repeatable, case-insensitive)
    #[arg(long = "tier", value_name = "NAME")]
    tiers: Vec<String>,

    /// JSON file with a list of tiers to use instead of the built-in ones
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Mark cells expanded by the search that are not on the path
    #[arg(long)]
    show_expanded: bool,

    /// Check every path cost against a breadth-first search
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    let cli = Cli::parse();

    let tiers = match &cli.config {
        Some(path) => load_tiers(path)?,
        None => default_tiers(),
    };
    let mut tiers = select_tiers(tiers, &cli.tiers)?;
    if let Some(n) = cli.trials {
        for tier in &mut tiers {
            tier.trials = n;
        }
    }
    log::info!("running {} tier(s) with seed {}", tiers.len(), cli.seed);

    let options = DriverOptions {
        show_expanded: cli.show_expanded,
        verify: cli.verify,
    };
    let stdout = io::stdout();
    let mut driver = TrialDriver::new(
        StdRng::seed_from_u64(cli.seed),
        BufWriter::new(stdout.lock()),
        options,
    );
    let result = driver.run_all(&tiers);
    driver.into_inner().flush()?;
    result?;
    Ok(())
}
