use gridstar_core::{Grid, Position, Tile};

/// Occupancy queries consumed by the search.
///
/// Implementations must be pure and stable for the duration of one search.
pub trait GridModel {
    /// Whether `p` is inside the grid and may be stepped on.
    ///
    /// Must re-check bounds on every call; a model must not rely on a sealed
    /// border to keep neighbours of edge cells in range.
    fn is_valid(&self, p: Position) -> bool;

    /// Whether `p` is inside the grid at all, regardless of occupancy.
    ///
    /// Only used to tell "out of bounds" from "blocked" when rejecting bad
    /// endpoints. Models without a notion of bounds keep the default.
    fn in_bounds(&self, _p: Position) -> bool {
        true
    }
}

impl GridModel for Grid {
    #[inline]
    fn is_valid(&self, p: Position) -> bool {
        self.contains(p) && self.at(p) == Some(Tile::Free)
    }

    #[inline]
    fn in_bounds(&self, p: Position) -> bool {
        self.contains(p)
    }
}

impl<T: GridModel + ?Sized> GridModel for &T {
    #[inline]
    fn is_valid(&self, p: Position) -> bool {
        (**self).is_valid(p)
    }

    #[inline]
    fn in_bounds(&self, p: Position) -> bool {
        (**self).in_bounds(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sealed(rows: i32, cols: i32) -> Grid {
        let mut g = Grid::new(rows, cols);
        g.seal_border();
        g
    }

    #[test]
    fn sealed_border_is_rejected() {
        let g = sealed(6, 9);
        for p in g.bounds() {
            let on_border = p.row == 0 || p.row == 5 || p.col == 0 || p.col == 8;
            assert_eq!(g.is_valid(p), !on_border, "{p}");
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        let g = sealed(4, 4);
        for p in [
            Position::new(-1, 1),
            Position::new(1, -1),
            Position::new(4, 1),
            Position::new(1, 4),
            Position::new(i32::MIN, i32::MAX),
        ] {
            assert!(!g.is_valid(p), "{p}");
            assert!(!g.in_bounds(p), "{p}");
        }
    }

    #[test]
    fn unsealed_edges_are_still_bounds_checked() {
        let g = Grid::new(3, 3);
        assert!(g.is_valid(Position::new(0, 0)));
        assert!(g.is_valid(Position::new(2, 2)));
        assert!(!g.is_valid(Position::new(3, 2)));
        assert!(!g.is_valid(Position::new(0, -1)));
    }

    #[test]
    fn obstacles_are_rejected() {
        let mut g = sealed(4, 4);
        g.set(Position::new(1, 2), Tile::Obstacle);
        assert!(!g.is_valid(Position::new(1, 2)));
        assert!(g.in_bounds(Position::new(1, 2)));
        assert!(g.is_valid(Position::new(1, 1)));
    }

    #[test]
    fn reference_forwards() {
        let g = sealed(4, 4);
        let r = &g;
        assert_eq!(r.is_valid(Position::new(1, 1)), g.is_valid(Position::new(1, 1)));
        assert!(!GridModel::in_bounds(&r, Position::new(9, 9)));
    }
}
