use crate::search::{
    board::{BLANK, NUM_CELLS, SIZE},
    heuristics::{Heuristic, HeuristicValue},
    Board,
};

/// Sum over all cells of the grid distance between where the value sits and
/// where it belongs. The blank counts as the last tile. Wraparound moves are
/// not taken into account.
pub fn manhattan(board: &Board) -> HeuristicValue {
    let mut sum = 0;
    for (row, cells) in board.cells().iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            let n = if value == BLANK {
                NUM_CELLS - 1
            } else {
                value as usize - 1
            };
            sum += row.abs_diff(n / SIZE) + col.abs_diff(n % SIZE);
        }
    }
    sum as HeuristicValue
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Manhattan {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for Manhattan {
    fn evaluate(&self, board: &Board) -> HeuristicValue {
        manhattan(board)
    }
}
