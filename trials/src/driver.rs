//! Runs search trials over generated grids and prints the results.

use std::fmt;
use std::io::{self, Write};

use gridstar_core::Grid;
use gridstar_gen::{ConfigError, GridGen, Overlay, render};
use gridstar_search::{Outcome, bfs_distance, find_path};
use rand::Rng;

use crate::tier::Tier;

/// Driver-level failures. A goal that cannot be reached is not one of them.
#[derive(Debug)]
pub enum DriverError {
    Io(io::Error),
    Json(serde_json::Error),
    Config(ConfigError),
    UnknownTier(String),
    /// The A* cost disagreed with the breadth-first reference.
    Mismatch {
        tier: String,
        trial: usize,
        astar: Option<usize>,
        bfs: Option<usize>,
    },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Json(e) => write!(f, "invalid tier file: {e}"),
            Self::Config(e) => write!(f, "invalid tier: {e}"),
            Self::UnknownTier(name) => write!(f, "unknown tier \u{201c}{name}\u{201d}"),
            Self::Mismatch {
                tier,
                trial,
                astar,
                bfs,
            } => write!(
                f,
                "{tier} trial {trial}: A* cost {astar:?} differs from BFS cost {bfs:?}"
            ),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ConfigError> for DriverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Presentation switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    /// Mark expanded cells that are not on the path.
    pub show_expanded: bool,
    /// Cross-check every cost against breadth-first search.
    pub verify: bool,
}

/// What one trial produced, for logging and tallies.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    pub tier: String,
    pub trial: usize,
    pub path_cost: Option<usize>,
    pub states_expanded: usize,
}

/// Runs tiers of trials against a single shared random source.
pub struct TrialDriver<R: Rng, W: Write> {
    rng: R,
    out: W,
    options: DriverOptions,
}

impl<R: Rng, W: Write> TrialDriver<R, W> {
    pub fn new(rng: R, out: W, options: DriverOptions) -> Self {
        Self { rng, out, options }
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run every tier in order.
    pub fn run_all(&mut self, tiers: &[Tier]) -> Result<Vec<TrialReport>, DriverError> {
        let mut reports = Vec::new();
        for tier in tiers {
            reports.extend(self.run_tier(tier)?);
        }
        Ok(reports)
    }

    /// Run all trials of one tier.
    pub fn run_tier(&mut self, tier: &Tier) -> Result<Vec<TrialReport>, DriverError> {
        let mut generator = GridGen::new(tier.config, &mut self.rng)?;
        let mut reports = Vec::with_capacity(tier.trials);
        for trial in 1..=tier.trials {
            let grid = generator.generate();
            let report = trial_on(&mut self.out, self.options, tier, trial, &grid)?;
            reports.push(report);
        }
        let solved = reports.iter().filter(|r| r.path_cost.is_some()).count();
        log::info!("{}: solved {}/{} trials", tier.name, solved, tier.trials);
        Ok(reports)
    }
}

fn trial_on(
    out: &mut impl Write,
    options: DriverOptions,
    tier: &Tier,
    trial: usize,
    grid: &Grid,
) -> Result<TrialReport, DriverError> {
    let (start, goal) = (tier.config.start(), tier.config.goal());

    writeln!(out, "\n\n-----{} trial {}-----", tier.name, trial)?;
    write!(out, "{}", render(grid, Overlay::none()))?;

    let outcome = find_path(grid, start, goal);
    match &outcome {
        Outcome::Found(route) => {
            writeln!(out, "Found goal! :)")?;
            let expanded = if options.show_expanded {
                route.expansion_order.as_slice()
            } else {
                &[]
            };
            let overlay = Overlay {
                path: &route.path,
                expanded,
            };
            write!(out, "{}", render(grid, overlay))?;
        }
        Outcome::NotFound { .. } => writeln!(out, "No path found.")?,
        Outcome::InvalidInput(reason) => writeln!(out, "Invalid input: {reason}")?,
    }

    let report = TrialReport {
        tier: tier.name.clone(),
        trial,
        path_cost: outcome.path_cost(),
        states_expanded: outcome.states_expanded(),
    };
    log::debug!(
        "{} trial {}: cost {:?}, {} states expanded",
        report.tier,
        report.trial,
        report.path_cost,
        report.states_expanded
    );

    if options.verify {
        let bfs = bfs_distance(grid, start, goal);
        if bfs != report.path_cost {
            log::error!("{} trial {}: A* and BFS disagree", tier.name, trial);
            return Err(DriverError::Mismatch {
                tier: tier.name.clone(),
                trial,
                astar: report.path_cost,
                bfs,
            });
        }
    }
    Ok(report)
}
