use gridstar_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> usize {
    (a.row.abs_diff(b.row) + a.col.abs_diff(b.col)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1, 7);
        let b = Position::new(4, 2);
        assert_eq!(manhattan(a, b), 8);
        assert_eq!(manhattan(b, a), 8);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_handles_negative_coordinates() {
        assert_eq!(manhattan(Position::new(-2, -3), Position::new(1, 1)), 7);
    }
}
