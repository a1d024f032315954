//! Grid generation and text rendering for gridstar.

pub mod mapgen;
pub mod render;

pub use mapgen::{ConfigError, GridConfig, GridGen};
pub use render::{Overlay, render};
