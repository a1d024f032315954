use std::collections::HashMap;
use std::fmt;

use gridstar_core::{Offset, Position};

use crate::frontier::Frontier;
use crate::ledger::CostLedger;
use crate::state::SearchState;
use crate::traits::GridModel;

/// Lifecycle of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, endpoints not yet checked.
    Initialized,
    /// Frontier seeded; expanding.
    Running,
    /// Goal popped from the frontier.
    Found,
    /// Frontier emptied without reaching the goal.
    Exhausted,
    /// Start or goal failed validation; the loop never ran.
    Rejected,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Found | Phase::Exhausted | Phase::Rejected)
    }
}

/// Why a search was refused before it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    StartOutOfBounds(Position),
    StartBlocked(Position),
    GoalOutOfBounds(Position),
    GoalBlocked(Position),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(p) => write!(f, "start {p} is outside the grid"),
            Self::StartBlocked(p) => write!(f, "start {p} is on an obstacle"),
            Self::GoalOutOfBounds(p) => write!(f, "goal {p} is outside the grid"),
            Self::GoalBlocked(p) => write!(f, "goal {p} is on an obstacle"),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// A shortest path and the work it took to find it.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Number of moves from start to goal.
    pub path_cost: usize,
    /// Number of accepted expansions; equals `expansion_order.len()`.
    pub states_expanded: usize,
    /// The goal state as it was popped from the frontier.
    pub final_state: SearchState,
    /// Positions in the order they were accepted for expansion.
    pub expansion_order: Vec<Position>,
    /// Every cell from start to goal inclusive.
    pub path: Vec<Position>,
}

/// Result of a complete search.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Found(Route),
    /// The goal is unreachable. This is a normal result, not an error.
    NotFound { states_expanded: usize },
    InvalidInput(InvalidInput),
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Outcome::Found(route) => Some(route),
            _ => None,
        }
    }

    pub fn path_cost(&self) -> Option<usize> {
        self.route().map(|r| r.path_cost)
    }

    pub fn states_expanded(&self) -> usize {
        match self {
            Outcome::Found(route) => route.states_expanded,
            Outcome::NotFound { states_expanded } => *states_expanded,
            Outcome::InvalidInput(_) => 0,
        }
    }
}

/// A* search over a [`GridModel`] with unit move costs and a Manhattan
/// heuristic.
///
/// Each engine owns its frontier and ledger, so any number of engines may
/// borrow the same grid at once.
pub struct AStarEngine<'g, G: GridModel + ?Sized> {
    grid: &'g G,
    start: Position,
    goal: Position,
    phase: Phase,
    frontier: Frontier,
    ledger: CostLedger,
    came_from: HashMap<Position, Position>,
    expansion_order: Vec<Position>,
    found: Option<SearchState>,
}

impl<'g, G: GridModel + ?Sized> AStarEngine<'g, G> {
    pub fn new(grid: &'g G, start: Position, goal: Position) -> Self {
        Self {
            grid,
            start,
            goal,
            phase: Phase::Initialized,
            frontier: Frontier::new(),
            ledger: CostLedger::new(),
            came_from: HashMap::new(),
            expansion_order: Vec::new(),
            found: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Positions accepted for expansion so far, in order.
    pub fn expansion_order(&self) -> &[Position] {
        &self.expansion_order
    }

    /// Check both endpoints against the grid.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !self.grid.in_bounds(self.start) {
            return Err(InvalidInput::StartOutOfBounds(self.start));
        }
        if !self.grid.is_valid(self.start) {
            return Err(InvalidInput::StartBlocked(self.start));
        }
        if !self.grid.in_bounds(self.goal) {
            return Err(InvalidInput::GoalOutOfBounds(self.goal));
        }
        if !self.grid.is_valid(self.goal) {
            return Err(InvalidInput::GoalBlocked(self.goal));
        }
        Ok(())
    }

    /// Advance the search by one transition.
    ///
    /// From `Initialized` this validates the endpoints and seeds the
    /// frontier; from `Running` it pops one state and either finishes,
    /// prunes it, or expands it. Returns the outcome once a terminal phase
    /// is reached, and keeps returning it on later calls.
    pub fn step(&mut self) -> Option<Outcome> {
        match self.phase {
            Phase::Initialized => {
                if let Err(reason) = self.validate() {
                    self.phase = Phase::Rejected;
                    return Some(Outcome::InvalidInput(reason));
                }
                self.frontier.push(SearchState::new(self.start, self.goal, 0));
                self.phase = Phase::Running;
                None
            }
            Phase::Running => {
                let Some(state) = self.frontier.pop() else {
                    self.phase = Phase::Exhausted;
                    return Some(self.not_found());
                };
                if state.is_goal() {
                    self.phase = Phase::Found;
                    self.found = Some(state);
                    return Some(Outcome::Found(self.route(state)));
                }
                // Reached before at equal or lower cost.
                if self.ledger.dominates(state.position(), state.path_cost()) {
                    return None;
                }
                self.accept(&state);
                self.expand(&state);
                None
            }
            Phase::Found => self.found.map(|s| Outcome::Found(self.route(s))),
            Phase::Exhausted => Some(self.not_found()),
            Phase::Rejected => self.validate().err().map(Outcome::InvalidInput),
        }
    }

    /// Run the search to completion.
    pub fn run(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }

    fn accept(&mut self, state: &SearchState) {
        self.ledger.record(state.position(), state.path_cost());
        if let Some(parent) = state.parent() {
            self.came_from.insert(state.position(), parent);
        }
        self.expansion_order.push(state.position());
    }

    fn expand(&mut self, state: &SearchState) {
        for offset in Offset::CARDINALS {
            let next = state.position() + offset;
            if !self.grid.is_valid(next) {
                continue;
            }
            self.frontier.push(state.successor(next));
        }
    }

    fn not_found(&self) -> Outcome {
        Outcome::NotFound {
            states_expanded: self.expansion_order.len(),
        }
    }

    /// Rebuild the path by walking parent links back from the goal.
    fn route(&self, goal: SearchState) -> Route {
        let mut path = vec![goal.position()];
        let mut cur = goal.parent();
        while let Some(p) = cur {
            path.push(p);
            cur = self.came_from.get(&p).copied();
        }
        path.reverse();
        Route {
            path_cost: goal.path_cost(),
            states_expanded: self.expansion_order.len(),
            final_state: goal,
            expansion_order: self.expansion_order.clone(),
            path,
        }
    }
}

/// Find a shortest path from `start` to `goal`.
///
/// Moves are the four axis-aligned steps in [`Offset::CARDINALS`] order,
/// each costing 1.
pub fn find_path<G: GridModel + ?Sized>(grid: &G, start: Position, goal: Position) -> Outcome {
    AStarEngine::new(grid, start, goal).run()
}
