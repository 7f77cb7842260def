//! This module implements the bounded best-first search shared by every
//! scoring strategy.

use crate::{
    search::{
        heuristics::ScoreStrategy,
        search_engines::{
            Frontier, SearchEngine, SearchResult, SearchSpace, SearchStatistics, Solution,
            TerminationCondition, DEFAULT_BUDGET,
        },
        successors, Board,
    },
    PuzzleError,
};
use tracing::{debug, info};

/// Best-first search that always expands the frontier state with the lowest
/// score. A neighbour is (re)recorded when it is new to the frontier or its
/// score strictly improves, unless it was already expanded with a score at
/// least as good. Every such recording counts towards the budget, and the
/// search gives up as soon as the count goes past it.
#[derive(Debug, Clone)]
pub struct BestFirstSearch {
    budget: usize,
}

impl BestFirstSearch {
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }
}

impl Default for BestFirstSearch {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

impl SearchEngine for BestFirstSearch {
    fn search(
        &mut self,
        start: &Board,
        strategy: &dyn ScoreStrategy,
    ) -> Result<(SearchResult, SearchStatistics), PuzzleError> {
        info!(strategy = strategy.name());
        let mut statistics = SearchStatistics::new();
        let termination_condition = TerminationCondition::new(self.budget);

        start.locate_blank()?;
        let goal_key = Board::goal().key();
        let start_key = start.key();
        let start_score = strategy.score(start, 0);
        let mut search_space =
            SearchSpace::new(start_key, start_score, strategy.tracks_step_cost());
        let mut frontier = Frontier::new();
        frontier.push(start_key, start_score);
        let mut explored_states = 0;

        while let Some((current_key, current_score)) = frontier.pop() {
            statistics.register_score(current_score);
            if current_key == goal_key {
                statistics.finalise_search();
                return Ok((
                    SearchResult::Success(Solution {
                        predecessors: search_space.into_predecessors(),
                        goal: goal_key,
                        explored_states,
                    }),
                    statistics,
                ));
            }

            search_space.close(current_key);
            statistics.increment_expanded_nodes();
            let current = current_key.decode()?;
            let step_cost = search_space
                .step_cost(&current_key)
                .map_or(0, |step_cost| step_cost + 1);

            for neighbour in successors(&current)? {
                statistics.increment_generated_nodes();
                let key = neighbour.key();
                let score = strategy.score(&neighbour, step_cost);
                let improves = search_space
                    .score(&key)
                    .map(|recorded| score < recorded);

                if search_space.is_closed(&key) && improves == Some(false) {
                    statistics.increment_skipped_nodes();
                    continue;
                }

                if frontier.contains(&key) && improves != Some(true) {
                    continue;
                }

                explored_states += 1;
                statistics.increment_explored_states();
                if let Some(result) = termination_condition.should_terminate(explored_states) {
                    statistics.finalise_search();
                    return Ok((result, statistics));
                }

                if search_space.is_closed(&key) && !frontier.contains(&key) {
                    statistics.increment_reopened_nodes();
                }
                debug!(explored_states = explored_states, score = score);
                search_space.record(key, current_key, score, step_cost);
                frontier.push(key, score);
            }
        }

        info!("frontier exhausted");
        statistics.finalise_search();
        Ok((SearchResult::FrontierExhausted, statistics))
    }
}
