use crate::search::{heuristics::HeuristicValue, StateKey};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Open list ordered by lowest score first. Among equal scores the state that
/// entered the frontier first wins. Rescoring a state that is still on the
/// frontier keeps its place in that order; a state that leaves and comes back
/// queues up behind everything already there.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: PriorityQueue<StateKey, Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` with `score`, or rescores it if it is already present.
    pub fn push(&mut self, key: StateKey, score: HeuristicValue) {
        match self.queue.get(&key) {
            Some((_, &Reverse((_, sequence)))) => {
                self.queue.change_priority(&key, Reverse((score, sequence)));
            }
            None => {
                self.queue.push(key, Reverse((score, self.next_sequence)));
                self.next_sequence += 1;
            }
        }
    }

    /// Removes and returns the best state with its score.
    pub fn pop(&mut self) -> Option<(StateKey, HeuristicValue)> {
        self.queue
            .pop()
            .map(|(key, Reverse((score, _)))| (key, score))
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.queue.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
