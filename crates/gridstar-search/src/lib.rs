//! A* shortest-path search on 2D occupancy grids.
//!
//! The search moves in the four axis-aligned directions at unit cost and is
//! guided by the Manhattan distance to the goal. Its pieces are exposed
//! individually:
//!
//! - [`SearchState`]: a node of the search tree (position, cost so far, goal)
//! - [`Frontier`]: min-priority queue with a deterministic tie-break
//! - [`CostLedger`]: best accepted cost per position, for dominance pruning
//! - [`AStarEngine`]: the search loop, driving the three above
//!
//! Most callers only need [`find_path`].
//!
//! ```
//! use gridstar_core::{Grid, Position};
//! use gridstar_search::{find_path, Outcome};
//!
//! let mut grid = Grid::new(4, 4);
//! grid.seal_border();
//! let outcome = find_path(&grid, Position::new(1, 1), Position::new(2, 2));
//! assert_eq!(outcome.path_cost(), Some(2));
//! assert!(matches!(outcome, Outcome::Found(_)));
//! ```
//!
//! The grid is only ever read through [`GridModel`]; the search itself never
//! prints or logs.

mod bfs;
mod distance;
mod engine;
mod frontier;
mod ledger;
mod state;
mod traits;

pub use bfs::bfs_distance;
pub use distance::manhattan;
pub use engine::{AStarEngine, InvalidInput, Outcome, Phase, Route, find_path};
pub use frontier::Frontier;
pub use ledger::CostLedger;
pub use state::SearchState;
pub use traits::GridModel;
