use crate::{
    search::{board::NUM_CELLS, Board},
    PuzzleError,
};
use std::{fmt, str::FromStr};

const BITS_PER_CELL: usize = 4;
const CELL_MASK: u64 = (1 << BITS_PER_CELL) - 1;

/// Canonical, value based key of a [`Board`]. The sixteen cells are packed
/// row-major into a `u64`, one nibble each, with the first cell in the most
/// significant nibble. Two boards with the same layout always have the same
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(u64);

impl StateKey {
    pub fn encode(board: &Board) -> Self {
        Self(
            board
                .row_major()
                .fold(0u64, |packed, value| {
                    (packed << BITS_PER_CELL) | (u64::from(value) & CELL_MASK)
                }),
        )
    }

    /// Unpacks the key back into a board. Fails if the key does not hold a
    /// permutation of `0..=15`.
    pub fn decode(self) -> Result<Board, PuzzleError> {
        Board::from_row_major(&self.values())
            .map_err(|e| PuzzleError::Format(format!("{:#018x}: {}", self.0, e)))
    }

    fn values(self) -> [u8; NUM_CELLS] {
        let mut values = [0; NUM_CELLS];
        for (i, value) in values.iter_mut().enumerate() {
            let shift = (NUM_CELLS - 1 - i) * BITS_PER_CELL;
            *value = ((self.0 >> shift) & CELL_MASK) as u8;
        }
        values
    }

    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl From<&Board> for StateKey {
    fn from(board: &Board) -> Self {
        Self::encode(board)
    }
}

/// Writes the key in the plain text layout used for board files: every cell
/// followed by a space, rows separated by newlines.
impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 && i % 4 == 0 {
                writeln!(f)?;
            }
            write!(f, "{} ", value)?;
        }
        Ok(())
    }
}

impl FromStr for StateKey {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|e| PuzzleError::Format(format!("{:?}: {}", token, e)))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if values.len() != NUM_CELLS {
            return Err(PuzzleError::Format(format!(
                "expected {} integers, found {}",
                NUM_CELLS,
                values.len()
            )));
        }
        let board =
            Board::from_row_major(&values).map_err(|e| PuzzleError::Format(e.to_string()))?;
        Ok(board.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn round_trip() {
        for cells in [GOAL, ONE_MOVE_DOWN, TWO_MOVES_DOWN, SCRAMBLED] {
            let board = board_from(cells);
            assert_eq!(board.key().decode().unwrap(), board);
        }
    }

    #[test]
    fn equal_layouts_equal_keys() {
        let a = board_from(ONE_MOVE_DOWN);
        let b = Board::goal().swapped((3, 3), (2, 3));
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), Board::goal().key());
    }

    #[test]
    fn keeps_row_major_order() {
        assert_eq!(
            Board::goal().key().into_inner(),
            0x1234_5678_9abc_def0
        );
    }

    #[test]
    fn out_of_range_cell_stays_in_its_nibble() {
        let mut cells = GOAL;
        cells[3][2] = 0x1f;
        let key = Board::from_cells_unchecked(cells).key().into_inner();
        assert_eq!(key, 0x1234_5678_9abc_def0);
    }

    #[test]
    fn decode_rejects_non_permutation() {
        let key = StateKey(0);
        assert!(matches!(key.decode(), Err(PuzzleError::Format(_))));
    }

    #[test]
    fn display_matches_board_file_layout() {
        assert_eq!(
            Board::goal().key().to_string(),
            "1 2 3 4 \n5 6 7 8 \n9 10 11 12 \n13 14 15 0 "
        );
    }

    #[test]
    fn text_round_trip() {
        let key = board_from(SCRAMBLED).key();
        assert_eq!(key.to_string().parse::<StateKey>().unwrap(), key);
    }

    #[test]
    fn from_str_wrong_count_fails() {
        assert!(matches!(
            "1 2 3".parse::<StateKey>(),
            Err(PuzzleError::Format(_))
        ));
    }

    #[test]
    fn from_str_non_integer_fails() {
        assert!(matches!(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 blank".parse::<StateKey>(),
            Err(PuzzleError::Format(_))
        ));
    }

    #[test]
    fn from_str_non_permutation_fails() {
        assert!(matches!(
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 15".parse::<StateKey>(),
            Err(PuzzleError::Format(_))
        ));
    }
}
