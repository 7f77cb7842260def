use crate::search::Board;

pub type Cells = [[u8; 4]; 4];

pub const GOAL: Cells = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 0]];

/// The blank moves down once to reach the goal.
pub const ONE_MOVE_DOWN: Cells = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 0], [13, 14, 15, 12]];

/// The blank moves right once to reach the goal.
pub const ONE_MOVE_RIGHT: Cells = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 0, 15]];

/// The blank wraps from the left column to the right column to reach the goal.
pub const ONE_MOVE_WRAP: Cells = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [0, 14, 15, 13]];

/// The blank moves down twice to reach the goal.
pub const TWO_MOVES_DOWN: Cells = [[1, 2, 3, 4], [5, 6, 7, 0], [9, 10, 11, 8], [13, 14, 15, 12]];

/// Solved by the blank moving right, down, right, down.
pub const SCRAMBLED: Cells = [[1, 2, 3, 4], [5, 0, 6, 8], [9, 10, 7, 11], [13, 14, 15, 12]];

/// The goal with two adjacent tiles swapped.
pub const UNSOLVABLE: Cells = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 15, 14, 0]];

pub fn board_from(cells: Cells) -> Board {
    Board::new(cells).expect("test board is not a permutation")
}
