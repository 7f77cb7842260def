//! Neighbour generation under the wraparound rule. Besides the usual
//! up/down/left/right swaps, a blank on the border may swap with the cell on
//! the opposite border of the same row or column.

use crate::{
    search::{
        board::{Position, SIZE},
        Board,
    },
    PuzzleError,
};

const LAST: usize = SIZE - 1;
const NUM_BRANCHES: usize = 8;

/// Lazily produces the boards reachable from a board in one move. The eight
/// move rules are checked one after another and independently of each
/// other, so the same neighbour could be produced twice on narrower grids;
/// the search deduplicates by [`StateKey`](crate::search::StateKey).
///
/// Cloning the iterator restarts it from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct Successors {
    board: Board,
    blank: Position,
    branch: usize,
}

impl Successors {
    pub fn new(board: &Board) -> Result<Self, PuzzleError> {
        Ok(Self {
            board: *board,
            blank: board.locate_blank()?,
            branch: 0,
        })
    }

    /// The cell the blank swaps with under the given rule, if the rule applies.
    fn target(&self, branch: usize) -> Option<Position> {
        let (r, c) = self.blank;
        match branch {
            // wraparound
            0 if r == 0 => Some((LAST, c)),
            1 if r == LAST => Some((0, c)),
            2 if c == 0 => Some((r, LAST)),
            3 if c == LAST => Some((r, 0)),
            // adjacent
            4 if r != 0 => Some((r - 1, c)),
            5 if r != LAST => Some((r + 1, c)),
            6 if c != 0 => Some((r, c - 1)),
            7 if c != LAST => Some((r, c + 1)),
            _ => None,
        }
    }
}

impl Iterator for Successors {
    type Item = Board;

    fn next(&mut self) -> Option<Self::Item> {
        while self.branch < NUM_BRANCHES {
            let branch = self.branch;
            self.branch += 1;
            if let Some(target) = self.target(branch) {
                return Some(self.board.swapped(self.blank, target));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(NUM_BRANCHES - self.branch))
    }
}

/// Generates the neighbours of `board`, see [`Successors`].
pub fn successors(board: &Board) -> Result<Successors, PuzzleError> {
    Successors::new(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search::board::NUM_CELLS, test_utils::*};
    use itertools::Itertools;

    fn all_blank_positions() -> Vec<Board> {
        (0..SIZE)
            .cartesian_product(0..SIZE)
            .map(|(row, col)| Board::goal().swapped((LAST, LAST), (row, col)))
            .collect()
    }

    #[test]
    fn neighbour_count_in_range() {
        for board in all_blank_positions() {
            let count = successors(&board).unwrap().count();
            assert!((2..=4).contains(&count), "{} neighbours for\n{}", count, board);
        }
    }

    #[test]
    fn neighbours_differ_in_two_cells() {
        for board in all_blank_positions() {
            let blank = board.locate_blank().unwrap();
            for neighbour in successors(&board).unwrap() {
                let differing = board
                    .row_major()
                    .zip(neighbour.row_major())
                    .filter(|(a, b)| a != b)
                    .count();
                assert_eq!(differing, 2);
                assert_ne!(neighbour.locate_blank().unwrap(), blank);
            }
        }
    }

    #[test]
    fn corner_wraps_both_ways() {
        let neighbours: Vec<Board> = successors(&Board::goal()).unwrap().collect();
        let blanks: Vec<Position> = neighbours
            .iter()
            .map(|b| b.locate_blank().unwrap())
            .collect();
        assert_eq!(blanks, vec![(0, 3), (3, 0), (2, 3), (3, 2)]);
    }

    #[test]
    fn interior_has_no_wraps() {
        let board = board_from(SCRAMBLED);
        let blanks: Vec<Position> = successors(&board)
            .unwrap()
            .map(|b| b.locate_blank().unwrap())
            .collect();
        assert_eq!(blanks, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn edge_wraps_once() {
        let board = board_from(TWO_MOVES_DOWN);
        let blanks: Vec<Position> = successors(&board)
            .unwrap()
            .map(|b| b.locate_blank().unwrap())
            .collect();
        assert_eq!(blanks, vec![(1, 0), (0, 3), (2, 3), (1, 2)]);
    }

    #[test]
    fn input_is_not_modified() {
        let board = board_from(ONE_MOVE_DOWN);
        let _ = successors(&board).unwrap().collect::<Vec<_>>();
        assert_eq!(board, board_from(ONE_MOVE_DOWN));
    }

    #[test]
    fn clone_restarts() {
        let generator = successors(&Board::goal()).unwrap();
        let first: Vec<Board> = generator.clone().collect();
        let second: Vec<Board> = generator.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn neighbours_keep_permutation() {
        for neighbour in successors(&board_from(SCRAMBLED)).unwrap() {
            let mut values: Vec<u8> = neighbour.row_major().collect();
            values.sort_unstable();
            assert_eq!(values, (0..NUM_CELLS as u8).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn missing_blank_fails() {
        let mut cells = GOAL;
        cells[3][3] = 9;
        let board = Board::from_cells_unchecked(cells);
        assert!(matches!(
            successors(&board),
            Err(PuzzleError::Invariant(_))
        ));
    }
}
