//! Plain-text rendering of grids and search results.

use std::collections::HashSet;

use gridstar_core::{Grid, Position, Tile};

/// Glyph for an obstacle cell.
pub const OBSTACLE: char = '1';
/// Glyph for a free cell.
pub const FREE: char = ' ';
/// Glyph for a cell on the path.
pub const PATH: char = '*';
/// Glyph for a cell the search expanded that is not on the path.
pub const EXPANDED: char = '.';

/// Cells to highlight on top of a grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay<'a> {
    pub path: &'a [Position],
    pub expanded: &'a [Position],
}

impl<'a> Overlay<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn path(path: &'a [Position]) -> Self {
        Self { path, expanded: &[] }
    }
}

/// Render `grid` one line per row, followed by an empty line.
///
/// Path cells win over expanded cells, which win over the underlying tile.
pub fn render(grid: &Grid, overlay: Overlay<'_>) -> String {
    let path: HashSet<Position> = overlay.path.iter().copied().collect();
    let expanded: HashSet<Position> = overlay.expanded.iter().copied().collect();

    let mut out = String::with_capacity(grid.bounds().len() + grid.rows() as usize + 1);
    for (p, tile) in grid.iter() {
        let ch = if path.contains(&p) {
            PATH
        } else if expanded.contains(&p) {
            EXPANDED
        } else {
            match tile {
                Tile::Obstacle => OBSTACLE,
                Tile::Free => FREE,
            }
        };
        out.push(ch);
        if p.col == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::parse(
            "
#####
#..##
#...#
#####
",
        )
        .unwrap()
    }

    #[test]
    fn bare_grid() {
        let out = render(&sample(), Overlay::none());
        assert_eq!(out, "11111\n1  11\n1   1\n11111\n\n");
    }

    #[test]
    fn path_overlay() {
        let path = [Position::new(1, 1), Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)];
        let out = render(&sample(), Overlay::path(&path));
        assert_eq!(out, "11111\n1* 11\n1***1\n11111\n\n");
    }

    #[test]
    fn path_wins_over_expanded() {
        let path = [Position::new(1, 1), Position::new(1, 2)];
        let expanded = [Position::new(1, 1), Position::new(2, 1), Position::new(2, 2)];
        let out = render(
            &sample(),
            Overlay {
                path: &path,
                expanded: &expanded,
            },
        );
        assert_eq!(out, "11111\n1**11\n1.. 1\n11111\n\n");
    }

    #[test]
    fn output_parses_back() {
        let g = sample();
        let text = render(&g, Overlay::none());
        assert_eq!(Grid::parse(&text).unwrap(), g);
    }
}
