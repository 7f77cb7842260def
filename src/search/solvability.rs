use crate::{
    search::{board::BLANK, Board},
    PuzzleError,
};
use itertools::Itertools;

/// Number of pairs of tiles, blank excluded, that appear in the wrong order
/// when the board is read row-major.
pub fn inversions(board: &Board) -> usize {
    board
        .row_major()
        .filter(|&value| value != BLANK)
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
}

/// Whether the goal can be reached from `board`: the one-indexed row of the
/// blank plus the number of inversions must be even.
pub fn is_solvable(board: &Board) -> Result<bool, PuzzleError> {
    let (blank_row, _) = board.locate_blank()?;
    Ok((blank_row + 1 + inversions(board)) % 2 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn goal_is_solvable() {
        assert_eq!(inversions(&Board::goal()), 0);
        assert!(is_solvable(&Board::goal()).unwrap());
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        assert_eq!(inversions(&board_from(UNSOLVABLE)), 1);
        assert!(!is_solvable(&board_from(UNSOLVABLE)).unwrap());
    }

    #[test]
    fn scrambled_boards_are_solvable() {
        for cells in [ONE_MOVE_DOWN, ONE_MOVE_RIGHT, ONE_MOVE_WRAP, TWO_MOVES_DOWN, SCRAMBLED] {
            assert!(is_solvable(&board_from(cells)).unwrap());
        }
    }

    #[test]
    fn vertical_wrap_keeps_parity() {
        let wrapped = Board::goal().swapped((3, 3), (0, 3));
        assert!(is_solvable(&wrapped).unwrap());
    }

    #[test]
    fn missing_blank_fails() {
        let mut cells = GOAL;
        cells[3][3] = 15;
        let board = Board::from_cells_unchecked(cells);
        assert!(matches!(
            is_solvable(&board),
            Err(PuzzleError::Invariant(_))
        ));
    }
}
