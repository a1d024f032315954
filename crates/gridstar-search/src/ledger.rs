use std::collections::HashMap;

use gridstar_core::Position;

/// Best accepted path cost per position.
///
/// Entries only ever decrease. Callers record a position once per accepted
/// expansion, not once per generated successor.
#[derive(Debug, Clone, Default)]
pub struct CostLedger {
    best: HashMap<Position, usize>,
}

impl CostLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest cost recorded for `p`, if any.
    pub fn best_cost_for(&self, p: Position) -> Option<usize> {
        self.best.get(&p).copied()
    }

    /// Store `cost` for `p` if it beats the current entry.
    ///
    /// Returns whether the ledger changed; a cost equal to or above the
    /// stored one is a no-op.
    pub fn record(&mut self, p: Position, cost: usize) -> bool {
        match self.best.get_mut(&p) {
            Some(best) if *best <= cost => false,
            Some(best) => {
                *best = cost;
                true
            }
            None => {
                self.best.insert(p, cost);
                true
            }
        }
    }

    /// Whether reaching `p` with `cost` is no better than what is on record.
    pub fn dominates(&self, p: Position, cost: usize) -> bool {
        self.best_cost_for(p).is_some_and(|best| best <= cost)
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
