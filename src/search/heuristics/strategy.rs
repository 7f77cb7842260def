use crate::search::{
    heuristics::{Heuristic, HeuristicValue, Manhattan, MisplacedTiles},
    Board,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// How the search engine scores a board. The engine only tracks the number
/// of moves from the start when [`ScoreStrategy::tracks_step_cost`] is true;
/// otherwise `step_cost` is always passed as zero.
pub trait ScoreStrategy: Debug {
    fn score(&self, board: &Board, step_cost: u32) -> HeuristicValue;

    fn tracks_step_cost(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// Scores a board by its heuristic value alone, `f(s) = h(s)`.
#[derive(Debug, Clone)]
pub struct GreedyStrategy<H: Heuristic> {
    heuristic: H,
    name: &'static str,
}

impl<H: Heuristic> GreedyStrategy<H> {
    pub fn new(heuristic: H, name: &'static str) -> Self {
        Self { heuristic, name }
    }
}

impl<H: Heuristic> ScoreStrategy for GreedyStrategy<H> {
    fn score(&self, board: &Board, _step_cost: u32) -> HeuristicValue {
        self.heuristic.evaluate(board)
    }

    fn tracks_step_cost(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Scores a board by the moves taken so far plus its heuristic value,
/// `f(s) = g(s) + h(s)`.
#[derive(Debug, Clone)]
pub struct StepCostStrategy<H: Heuristic> {
    heuristic: H,
    name: &'static str,
}

impl<H: Heuristic> StepCostStrategy<H> {
    pub fn new(heuristic: H, name: &'static str) -> Self {
        Self { heuristic, name }
    }
}

impl<H: Heuristic> ScoreStrategy for StepCostStrategy<H> {
    fn score(&self, board: &Board, step_cost: u32) -> HeuristicValue {
        step_cost + self.heuristic.evaluate(board)
    }

    fn tracks_step_cost(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StrategyName {
    #[clap(help = "Greedy best-first search on the Manhattan distance.")]
    Manhattan,
    #[clap(help = "Moves taken so far plus the number of misplaced tiles.")]
    MisplacedTiles,
}

impl StrategyName {
    pub fn create(&self, goal: Board) -> Box<dyn ScoreStrategy> {
        match self {
            StrategyName::Manhattan => {
                Box::new(GreedyStrategy::new(Manhattan::new(), "manhattan distance"))
            }
            StrategyName::MisplacedTiles => Box::new(StepCostStrategy::new(
                MisplacedTiles::new(goal),
                "misplaced tiles",
            )),
        }
    }

    pub fn all() -> Vec<StrategyName> {
        vec![StrategyName::Manhattan, StrategyName::MisplacedTiles]
    }
}
