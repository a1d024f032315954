use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::state::SearchState;

/// Heap entry wrapping a state with its insertion sequence number.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops, in turn:
/// 1. the lowest `priority()`,
/// 2. on equal priority, the lowest `path_cost()`,
/// 3. on equal cost, the earliest insertion.
///
/// The sequence number is unique per frontier, so no two entries compare
/// equal and the pop order is fully determined.
#[derive(Debug, Clone, Copy)]
struct Entry {
    seq: u64,
    state: SearchState,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed throughout: smaller keys must come out first.
        other
            .state
            .priority()
            .cmp(&self.state.priority())
            .then_with(|| other.state.path_cost().cmp(&self.state.path_cost()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue of [`SearchState`]s.
///
/// Several entries for the same position may coexist at different costs;
/// duplicates are resolved by the caller when they are popped.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: SearchState) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, state });
    }

    /// Remove and return the state that sorts first, see [`Entry`] for the
    /// tie-break rule.
    pub fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|e| e.state)
    }

    pub fn peek(&self) -> Option<&SearchState> {
        self.heap.peek().map(|e| &e.state)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
