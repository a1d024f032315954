//! An occupancy grid of [`Tile`] values.
//!
//! [`Grid`] owns its cells outright (no shared buffers, no interior
//! mutability), so a `&Grid` can be handed to any number of concurrent
//! searches.

use std::fmt;

use crate::geom::{Position, Range};

/// Label of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Free,
    Obstacle,
}

impl Tile {
    /// Whether a search may step onto this tile.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Tile::Free)
    }

    /// Map an ASCII character to a tile, as accepted by [`Grid::parse`].
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' | ' ' | '0' => Some(Tile::Free),
            '#' | '1' => Some(Tile::Obstacle),
            _ => None,
        }
    }
}

/// A fixed-size `rows × cols` grid stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Tile>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid with every cell free.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, Tile::Free)
    }

    /// Create a new grid with every cell set to `tile`.
    pub fn filled(rows: i32, cols: i32, tile: Tile) -> Self {
        let bounds = Range::new(rows, cols);
        Self {
            cells: vec![tile; bounds.len()],
            bounds,
        }
    }

    /// Parse a grid from ASCII art.
    ///
    /// `#` and `1` are obstacles; `.`, `0` and space are free. Whitespace-only
    /// lines before and after the art are ignored (write an all-free edge row
    /// with `.`), and every remaining line must have the same width.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let all: Vec<&str> = s.lines().collect();
        let blank = |l: &&str| l.trim().is_empty();
        let (Some(first), Some(last)) = (
            all.iter().position(|l| !blank(l)),
            all.iter().rposition(|l| !blank(l)),
        ) else {
            return Err(ParseError::Empty);
        };
        let lines = &all[first..=last];
        let width = lines[0].chars().count();

        let mut grid = Grid::new(lines.len() as i32, width as i32);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row as i32, col as i32);
                let tile = Tile::from_char(ch).ok_or(ParseError::InvalidChar { ch, pos })?;
                grid.set(pos, tile);
            }
        }
        Ok(grid)
    }

    /// Returns the bounding range of this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether this grid contains the given position.
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    fn index(&self, p: Position) -> usize {
        (p.row * self.bounds.cols() + p.col) as usize
    }

    /// Get the tile at a position, or `None` if out of bounds.
    pub fn at(&self, p: Position) -> Option<Tile> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the tile at a position. Does nothing if out of bounds.
    pub fn set(&mut self, p: Position, tile: Tile) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = tile;
    }

    /// Whether `p` is inside the grid and free.
    pub fn is_free(&self, p: Position) -> bool {
        self.at(p).is_some_and(Tile::is_free)
    }

    /// Turn every border cell into an obstacle.
    pub fn seal_border(&mut self) {
        let bounds = self.bounds;
        for p in bounds.iter().filter(|&p| bounds.is_border(p)) {
            self.set(p, Tile::Obstacle);
        }
    }

    /// Whether every border cell is an obstacle.
    pub fn is_sealed(&self) -> bool {
        self.iter()
            .filter(|&(p, _)| self.bounds.is_border(p))
            .all(|(_, t)| t == Tile::Obstacle)
    }

    /// Count how many cells equal the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Iterate over `(Position, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

/// Errors that can occur when parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No non-blank lines were found.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no tile mapping was found.
    InvalidChar { ch: char, pos: Position },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no content"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(5, 10);
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.count(Tile::Free), 50);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Position::new(2, 3);
        g.set(p, Tile::Obstacle);
        assert_eq!(g.at(p), Some(Tile::Obstacle));
        assert_eq!(g.at(Position::new(0, 0)), Some(Tile::Free));
        assert_eq!(g.at(Position::new(10, 10)), None);
        assert_eq!(g.at(Position::new(-1, 0)), None);
        g.set(Position::new(4, 0), Tile::Obstacle);
        assert_eq!(g.count(Tile::Obstacle), 1);
    }

    #[test]
    fn non_square_indexing() {
        let mut g = Grid::new(2, 3);
        g.set(Position::new(1, 0), Tile::Obstacle);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[3], (Position::new(1, 0), Tile::Obstacle));
        assert!(g.is_free(Position::new(0, 2)));
        assert!(!g.is_free(Position::new(1, 0)));
    }

    #[test]
    fn seal_border() {
        let mut g = Grid::new(4, 5);
        assert!(!g.is_sealed());
        g.seal_border();
        assert!(g.is_sealed());
        assert_eq!(g.count(Tile::Obstacle), 4 * 5 - 2 * 3);
        assert!(g.is_free(Position::new(1, 1)));
        assert!(g.is_free(Position::new(2, 3)));
    }

    #[test]
    fn parse_art() {
        let g = Grid::parse(
            "
####
#..#
#1 #
####
",
        )
        .unwrap();
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 4);
        assert!(g.is_sealed());
        assert!(g.is_free(Position::new(1, 1)));
        assert!(g.is_free(Position::new(2, 2)));
        assert!(!g.is_free(Position::new(2, 1)));
    }

    #[test]
    fn parse_keeps_interior_spaces() {
        let g = Grid::parse("###\n# #\n###").unwrap();
        assert!(g.is_free(Position::new(1, 1)));
    }

    #[test]
    fn parse_inconsistent_width() {
        let err = Grid::parse("###\n#.\n###").unwrap_err();
        assert_eq!(
            err,
            ParseError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_invalid_char() {
        let err = Grid::parse("##\n#x").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidChar {
                ch: 'x',
                pos: Position::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(Grid::parse("\n\n"), Err(ParseError::Empty));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_and_position_round_trip() {
        let pair = (Position::new(3, 7), Tile::Obstacle);
        let json = serde_json::to_string(&pair).unwrap();
        let back: (Position, Tile) = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, back);
    }
}
