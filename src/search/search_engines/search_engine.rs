use crate::{
    search::{heuristics::ScoreStrategy, search_engines::SearchStatistics, Board, Plan, StateKey},
    PuzzleError,
};
use std::collections::HashMap;

/// Default number of explored states after which a search gives up.
pub const DEFAULT_BUDGET: usize = 3000;

/// What a successful search leaves behind: enough to rebuild the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Predecessor of every state reached, the start has none.
    pub predecessors: HashMap<StateKey, StateKey>,
    pub goal: StateKey,
    /// Number of times a state was recorded with a new or better score.
    pub explored_states: usize,
}

impl Solution {
    pub fn plan(&self) -> Result<Plan, PuzzleError> {
        Plan::from_predecessors(&self.predecessors, self.goal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The goal was reached
    Success(Solution),
    /// More states were explored than the budget allows. Says nothing about
    /// whether the board is solvable.
    BudgetExceeded { budget: usize },
    /// Every reachable state was expanded without finding the goal
    FrontierExhausted,
}

pub trait SearchEngine {
    /// Searches from `start` to the canonical goal, scoring states with
    /// `strategy`. Errors only on malformed boards or state keys.
    fn search(
        &mut self,
        start: &Board,
        strategy: &dyn ScoreStrategy,
    ) -> Result<(SearchResult, SearchStatistics), PuzzleError>;
}
