use std::hash::{Hash, Hasher};

use gridstar_core::Position;

use crate::distance::manhattan;

/// One node of the search tree.
///
/// The heuristic and priority are derived on demand from the stored fields,
/// never cached. Equality and hashing look at the position only: two states
/// reaching the same cell by different routes are the same logical node.
/// Ordering in the frontier is a separate concern, see
/// [`Frontier`](crate::Frontier).
#[derive(Debug, Clone, Copy)]
pub struct SearchState {
    position: Position,
    goal: Position,
    path_cost: usize,
    parent: Option<Position>,
}

impl SearchState {
    /// Create a root state at `position` with the given cost so far.
    pub fn new(position: Position, goal: Position, path_cost: usize) -> Self {
        Self {
            position,
            goal,
            path_cost,
            parent: None,
        }
    }

    /// The state reached by one move from `self` onto `position`.
    pub fn successor(&self, position: Position) -> Self {
        Self {
            position,
            goal: self.goal,
            path_cost: self.path_cost + 1,
            parent: Some(self.position),
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Number of moves taken from the start (g).
    #[inline]
    pub fn path_cost(&self) -> usize {
        self.path_cost
    }

    /// Position this state was generated from, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<Position> {
        self.parent
    }

    /// Manhattan distance to the goal (h).
    #[inline]
    pub fn heuristic(&self) -> usize {
        manhattan(self.position, self.goal)
    }

    /// Estimated total cost through this state (f = g + h).
    #[inline]
    pub fn priority(&self) -> usize {
        self.path_cost + self.heuristic()
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.position == self.goal
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for SearchState {}

impl Hash for SearchState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn priority_is_cost_plus_heuristic() {
        let s = SearchState::new(Position::new(1, 1), Position::new(4, 5), 3);
        assert_eq!(s.heuristic(), 7);
        assert_eq!(s.priority(), 10);
        assert!(!s.is_goal());
        assert_eq!(s.parent(), None);
    }

    #[test]
    fn successor_costs_one_more_move() {
        let goal = Position::new(4, 4);
        let s = SearchState::new(Position::new(1, 1), goal, 0);
        let t = s.successor(Position::new(1, 2));
        assert_eq!(t.path_cost(), 1);
        assert_eq!(t.goal(), goal);
        assert_eq!(t.parent(), Some(Position::new(1, 1)));
        assert_eq!(t.heuristic(), 5);
        assert_eq!(t.priority(), 6);
    }

    #[test]
    fn equality_ignores_cost_and_history() {
        let goal = Position::new(3, 3);
        let a = SearchState::new(Position::new(2, 2), goal, 2);
        let b = SearchState::new(Position::new(2, 1), goal, 1).successor(Position::new(2, 2));
        let c = SearchState::new(Position::new(2, 2), goal, 9);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a.path_cost(), c.path_cost());

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn goal_state() {
        let p = Position::new(2, 2);
        let s = SearchState::new(p, p, 0);
        assert!(s.is_goal());
        assert_eq!(s.priority(), 0);
    }
}
