//! Difficulty tiers.

use std::fs;
use std::path::Path;

use gridstar_gen::GridConfig;
use serde::{Deserialize, Serialize};

use crate::driver::DriverError;

/// Trials run per tier unless overridden.
pub const DEFAULT_TRIALS: usize = 5;

/// A named grid configuration and how many trials to run on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    #[serde(flatten)]
    pub config: GridConfig,
    #[serde(default = "default_trials")]
    pub trials: usize,
}

fn default_trials() -> usize {
    DEFAULT_TRIALS
}

impl Tier {
    pub fn new(name: &str, config: GridConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
            trials: DEFAULT_TRIALS,
        }
    }
}

/// The built-in ladder: Easy, Harder, INSANE.
pub fn default_tiers() -> Vec<Tier> {
    vec![
        Tier::new("Easy", GridConfig::new(8, 16, 0.20)),
        Tier::new("Harder", GridConfig::new(15, 30, 0.30)),
        Tier::new("INSANE", GridConfig::new(20, 60, 0.35)),
    ]
}

/// Parse a JSON array of tiers.
///
/// ```json
/// [{ "name": "Tiny", "rows": 5, "cols": 8, "obstacle_probability": 0.1, "trials": 2 }]
/// ```
pub fn parse_tiers(json: &str) -> Result<Vec<Tier>, DriverError> {
    let tiers: Vec<Tier> = serde_json::from_str(json)?;
    for tier in &tiers {
        tier.config.validate()?;
    }
    Ok(tiers)
}

/// Read and parse a tier file.
pub fn load_tiers(path: &Path) -> Result<Vec<Tier>, DriverError> {
    let json = fs::read_to_string(path)?;
    parse_tiers(&json)
}

/// Keep the tiers whose names match one of `names`, ignoring case.
/// An empty selection keeps everything.
pub fn select_tiers(tiers: Vec<Tier>, names: &[String]) -> Result<Vec<Tier>, DriverError> {
    if names.is_empty() {
        return Ok(tiers);
    }
    for name in names {
        if !tiers.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(DriverError::UnknownTier(name.clone()));
        }
    }
    Ok(tiers
        .into_iter()
        .filter(|t| names.iter().any(|n| t.name.eq_ignore_ascii_case(n)))
        .collect())
}
