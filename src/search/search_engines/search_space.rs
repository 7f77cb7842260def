use crate::search::{heuristics::HeuristicValue, StateKey};
use std::collections::{HashMap, HashSet};

/// Everything a search run knows about the states it has seen: their scores,
/// their step costs when the strategy needs them, the predecessor each was
/// last reached from, and which of them have been expanded.
#[derive(Debug)]
pub struct SearchSpace {
    scores: HashMap<StateKey, HeuristicValue>,
    step_costs: Option<HashMap<StateKey, u32>>,
    predecessors: HashMap<StateKey, StateKey>,
    closed: HashSet<StateKey>,
}

impl SearchSpace {
    /// Creates a search space holding only the start state. Step costs are
    /// recorded only when `track_step_costs` is set.
    pub fn new(start: StateKey, start_score: HeuristicValue, track_step_costs: bool) -> Self {
        Self {
            scores: HashMap::from([(start, start_score)]),
            step_costs: track_step_costs.then(|| HashMap::from([(start, 0)])),
            predecessors: HashMap::new(),
            closed: HashSet::new(),
        }
    }

    pub fn score(&self, key: &StateKey) -> Option<HeuristicValue> {
        self.scores.get(key).copied()
    }

    pub fn step_cost(&self, key: &StateKey) -> Option<u32> {
        self.step_costs
            .as_ref()
            .and_then(|step_costs| step_costs.get(key).copied())
    }

    pub fn tracks_step_costs(&self) -> bool {
        self.step_costs.is_some()
    }

    pub fn is_closed(&self, key: &StateKey) -> bool {
        self.closed.contains(key)
    }

    pub fn close(&mut self, key: StateKey) {
        self.closed.insert(key);
    }

    /// Records that `key` was reached from `parent` with the given score and
    /// step cost, replacing anything known before.
    pub fn record(
        &mut self,
        key: StateKey,
        parent: StateKey,
        score: HeuristicValue,
        step_cost: u32,
    ) {
        self.predecessors.insert(key, parent);
        self.scores.insert(key, score);
        if let Some(step_costs) = self.step_costs.as_mut() {
            step_costs.insert(key, step_cost);
        }
    }

    pub fn predecessors(&self) -> &HashMap<StateKey, StateKey> {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> HashMap<StateKey, StateKey> {
        self.predecessors
    }

    pub fn num_closed(&self) -> usize {
        self.closed.len()
    }
}
