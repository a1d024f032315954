//! Random obstacle grids with a sealed border.

use std::fmt;

use gridstar_core::{Grid, Position, Tile};
use rand::Rng;

/// Dimensions and obstacle density of a generated grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    /// Chance (0.0–1.0) that an eligible interior cell becomes an obstacle.
    pub obstacle_probability: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 16,
            obstacle_probability: 0.20,
        }
    }
}

impl GridConfig {
    pub const fn new(rows: i32, cols: i32, obstacle_probability: f64) -> Self {
        Self {
            rows,
            cols,
            obstacle_probability,
        }
    }

    /// Reject sizes with no interior and probabilities outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(ConfigError::TooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.obstacle_probability) {
            return Err(ConfigError::Probability(self.obstacle_probability));
        }
        Ok(())
    }

    /// The top-left interior cell, always left free.
    pub fn start(&self) -> Position {
        Position::new(1, 1)
    }

    /// The bottom-right interior cell, always left free.
    pub fn goal(&self) -> Position {
        Position::new(self.rows - 2, self.cols - 2)
    }
}

/// Errors from an unusable [`GridConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than 3 rows or columns leave no interior.
    TooSmall { rows: i32, cols: i32 },
    /// Obstacle probability outside `[0, 1]` (or NaN).
    Probability(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { rows, cols } => {
                write!(f, "grid {rows}x{cols} is too small, need at least 3x3")
            }
            Self::Probability(p) => {
                write!(f, "obstacle probability {p} is outside [0, 1]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Grid generator driven by a caller-supplied random source.
pub struct GridGen<R: Rng> {
    pub rng: R,
    pub config: GridConfig,
}

impl<R: Rng> GridGen<R> {
    /// Create a generator, validating the configuration first.
    pub fn new(config: GridConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// Generate one grid.
    ///
    /// 1. Seal the border with obstacles.
    /// 2. Scatter obstacles over rows `1..rows-1` and columns `2..cols-2`,
    ///    each with `obstacle_probability`. The first and last interior
    ///    columns stay open.
    /// 3. Clear the start and goal cells.
    pub fn generate(&mut self) -> Grid {
        let GridConfig {
            rows,
            cols,
            obstacle_probability,
        } = self.config;
        let mut grid = Grid::new(rows, cols);
        grid.seal_border();

        for row in 1..rows - 1 {
            for col in 2..cols - 2 {
                let r: f64 = self.rng.random();
                if r < obstacle_probability {
                    grid.set(Position::new(row, col), Tile::Obstacle);
                }
            }
        }

        grid.set(self.config.start(), Tile::Free);
        grid.set(self.config.goal(), Tile::Free);

        log::debug!(
            "generated {}x{} grid with {} obstacles (p = {})",
            rows,
            cols,
            grid.count(Tile::Obstacle),
            obstacle_probability
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_config_is_valid() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.start(), Position::new(1, 1));
        assert_eq!(cfg.goal(), Position::new(6, 14));
    }

    #[test]
    fn rejects_bad_configs() {
        assert_eq!(
            GridConfig::new(2, 10, 0.1).validate(),
            Err(ConfigError::TooSmall { rows: 2, cols: 10 })
        );
        assert_eq!(
            GridConfig::new(8, 8, 1.5).validate(),
            Err(ConfigError::Probability(1.5))
        );
        assert!(GridConfig::new(8, 8, f64::NAN).validate().is_err());
        assert!(GridGen::new(GridConfig::new(8, 8, -0.1), StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn border_is_sealed_and_endpoints_free() {
        let cfg = GridConfig::new(15, 30, 0.9);
        let mut g = GridGen::new(cfg, StdRng::seed_from_u64(1)).unwrap();
        for _ in 0..5 {
            let grid = g.generate();
            assert_eq!(grid.rows(), 15);
            assert_eq!(grid.cols(), 30);
            assert!(grid.is_sealed());
            assert!(grid.is_free(cfg.start()));
            assert!(grid.is_free(cfg.goal()));
        }
    }

    #[test]
    fn edge_columns_stay_open() {
        let cfg = GridConfig::new(10, 12, 1.0);
        let grid = GridGen::new(cfg, StdRng::seed_from_u64(2)).unwrap().generate();
        for row in 1..9 {
            assert!(grid.is_free(Position::new(row, 1)));
            assert!(grid.is_free(Position::new(row, 10)));
            for col in 2..10 {
                assert!(!grid.is_free(Position::new(row, col)));
            }
        }
    }

    #[test]
    fn zero_probability_leaves_interior_open() {
        let cfg = GridConfig::new(6, 9, 0.0);
        let grid = GridGen::new(cfg, StdRng::seed_from_u64(3)).unwrap().generate();
        assert_eq!(grid.count(Tile::Free), 4 * 7);
    }

    #[test]
    fn same_seed_same_grids() {
        let cfg = GridConfig::new(20, 60, 0.35);
        let mut a = GridGen::new(cfg, StdRng::seed_from_u64(42)).unwrap();
        let mut b = GridGen::new(cfg, StdRng::seed_from_u64(42)).unwrap();
        for _ in 0..3 {
            assert_eq!(a.generate(), b.generate());
        }
    }
}
