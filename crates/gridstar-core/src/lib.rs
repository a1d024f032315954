//! **gridstar-core**: geometry and occupancy types for grid path search.
//!
//! This crate provides the value types shared across the *gridstar*
//! workspace: [`Position`] coordinates, [`Range`] rectangles, and the
//! [`Grid`] occupancy map of free and obstacle [`Tile`]s.

pub mod geom;
pub mod grid;

pub use geom::{Offset, Position, Range, RangeIter};
pub use grid::{Grid, ParseError, Tile};
