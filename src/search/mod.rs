pub mod board;
mod direction;
pub mod heuristics;
mod plan;
pub mod search_engines;
mod solvability;
mod state_key;
mod successor_generator;
mod validate;
mod verbosity;

pub use board::{Board, Position};
pub use direction::{to_directions, Direction};
pub use heuristics::{Heuristic, HeuristicValue, ScoreStrategy, StrategyName};
pub use plan::{backtrack, Plan};
pub use search_engines::{BestFirstSearch, SearchEngine, SearchResult, Solution};
pub use solvability::{inversions, is_solvable};
pub use state_key::StateKey;
pub use successor_generator::{successors, Successors};
pub use validate::validate;
pub use verbosity::Verbosity;
