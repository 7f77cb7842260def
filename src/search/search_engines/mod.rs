mod best_first;
mod frontier;
mod search_engine;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use best_first::BestFirstSearch;
pub use frontier::Frontier;
pub use search_engine::{SearchEngine, SearchResult, Solution, DEFAULT_BUDGET};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
