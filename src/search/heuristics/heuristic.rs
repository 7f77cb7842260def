use crate::search::Board;
use std::fmt::Debug;

/// Heuristic estimates are whole numbers of moves.
pub type HeuristicValue = u32;

pub trait Heuristic: Debug {
    /// Estimate how far the board is from the goal. Must be zero exactly at
    /// the goal.
    fn evaluate(&self, board: &Board) -> HeuristicValue;
}
