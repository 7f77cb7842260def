use crate::search::search_engines::SearchResult;
use tracing::{info, warn};

/// Caps the number of states a search may explore.
#[derive(Debug, Clone, Copy)]
pub struct TerminationCondition {
    budget: usize,
}

impl TerminationCondition {
    pub fn new(budget: usize) -> Self {
        info!(budget = budget);
        Self { budget }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn should_terminate(&self, explored_states: usize) -> Option<SearchResult> {
        if explored_states > self.budget {
            warn!(
                explored_states = explored_states,
                budget = self.budget,
                "search budget exceeded"
            );
            return Some(SearchResult::BudgetExceeded {
                budget: self.budget,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminates_only_past_budget() {
        let condition = TerminationCondition::new(3);
        assert_eq!(condition.should_terminate(0), None);
        assert_eq!(condition.should_terminate(3), None);
        assert_eq!(
            condition.should_terminate(4),
            Some(SearchResult::BudgetExceeded { budget: 3 })
        );
    }

    #[test]
    fn zero_budget() {
        let condition = TerminationCondition::new(0);
        assert_eq!(condition.budget(), 0);
        assert!(condition.should_terminate(1).is_some());
    }
}
