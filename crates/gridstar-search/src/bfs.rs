use std::collections::{HashMap, VecDeque};

use gridstar_core::{Offset, Position};

use crate::traits::GridModel;

/// Length of the shortest path from `start` to `goal` by plain
/// breadth-first search, or `None` if there is none.
///
/// Uninformed and slower than [`find_path`](crate::find_path); it exists
/// as an independent reference for checking search results.
pub fn bfs_distance<G: GridModel + ?Sized>(grid: &G, start: Position, goal: Position) -> Option<usize> {
    if !grid.is_valid(start) || !grid.is_valid(goal) {
        return None;
    }

    let mut dist: HashMap<Position, usize> = HashMap::new();
    let mut queue: VecDeque<Position> = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(cp) = queue.pop_front() {
        let current_dist = dist[&cp];
        if cp == goal {
            return Some(current_dist);
        }
        for offset in Offset::CARDINALS {
            let np = cp + offset;
            if !grid.is_valid(np) || dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, current_dist + 1);
            queue.push_back(np);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Grid;

    #[test]
    fn counts_moves_around_walls() {
        let g = Grid::parse(
            "
######
#..#.#
##.#.#
#....#
######
",
        )
        .unwrap();
        assert_eq!(bfs_distance(&g, Position::new(1, 1), Position::new(1, 4)), Some(7));
        assert_eq!(bfs_distance(&g, Position::new(3, 1), Position::new(3, 1)), Some(0));
    }

    #[test]
    fn unreachable_or_blocked() {
        let g = Grid::parse("#####\n#.#.#\n#####").unwrap();
        assert_eq!(bfs_distance(&g, Position::new(1, 1), Position::new(1, 3)), None);
        assert_eq!(bfs_distance(&g, Position::new(1, 1), Position::new(1, 2)), None);
    }
}
