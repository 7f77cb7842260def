mod heuristic;
mod manhattan;
mod misplaced_tiles;
mod strategy;

pub use heuristic::{Heuristic, HeuristicValue};
pub use manhattan::{manhattan, Manhattan};
pub use misplaced_tiles::{misplaced, MisplacedTiles};
pub use strategy::{GreedyStrategy, ScoreStrategy, StepCostStrategy, StrategyName};
