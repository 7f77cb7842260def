use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    Board,
};

/// Number of cells, the blank included, that differ between `board` and
/// `goal`.
pub fn misplaced(board: &Board, goal: &Board) -> HeuristicValue {
    board
        .row_major()
        .zip(goal.row_major())
        .filter(|(a, b)| a != b)
        .count() as HeuristicValue
}

#[derive(Debug, Clone, Copy)]
pub struct MisplacedTiles {
    goal: Board,
}

impl MisplacedTiles {
    pub fn new(goal: Board) -> Self {
        Self { goal }
    }
}

impl Default for MisplacedTiles {
    fn default() -> Self {
        Self::new(Board::goal())
    }
}

impl Heuristic for MisplacedTiles {
    fn evaluate(&self, board: &Board) -> HeuristicValue {
        misplaced(board, &self.goal)
    }
}
