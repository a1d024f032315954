//! Trial driver for gridstar: generates grids tier by tier, searches them,
//! and prints each grid with its verdict.

pub mod driver;
pub mod tier;

pub use driver::{DriverError, DriverOptions, TrialDriver, TrialReport};
pub use tier::{DEFAULT_TRIALS, Tier, default_tiers, load_tiers, parse_tiers, select_tiers};
