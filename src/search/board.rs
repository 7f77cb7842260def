//! The 4x4 board of the wraparound fifteen puzzle. A [`Board`] is a plain
//! `Copy` value; producing a neighbour always copies the board and swaps two
//! cells, so boards held by the search are never mutated behind its back.

use crate::{parsers::parse_board_values, search::StateKey, PuzzleError};
use nom_greedyerror::error_position;
use std::{fmt, ops::Index, path::Path};

/// Width and height of the board.
pub const SIZE: usize = 4;
/// Number of cells on the board.
pub const NUM_CELLS: usize = SIZE * SIZE;
/// The value marking the blank cell.
pub const BLANK: u8 = 0;

/// A cell coordinate as `(row, col)`, both zero-indexed.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; SIZE]; SIZE],
}

impl Board {
    /// Creates a board, checking that the cells hold each of `0..=15`
    /// exactly once.
    pub fn new(cells: [[u8; SIZE]; SIZE]) -> Result<Self, PuzzleError> {
        let mut seen = [false; NUM_CELLS];
        for &value in cells.iter().flatten() {
            let index = value as usize;
            if index >= NUM_CELLS {
                return Err(PuzzleError::InvalidBoard(format!(
                    "value {} is out of range",
                    value
                )));
            }
            if seen[index] {
                return Err(PuzzleError::InvalidBoard(format!(
                    "value {} appears more than once",
                    value
                )));
            }
            seen[index] = true;
        }
        Ok(Self { cells })
    }

    /// Creates a board without checking that it is a permutation.
    #[cfg(test)]
    pub(crate) fn from_cells_unchecked(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Creates a board from 16 values in row-major order.
    pub fn from_row_major(values: &[u8]) -> Result<Self, PuzzleError> {
        if values.len() != NUM_CELLS {
            return Err(PuzzleError::InvalidBoard(format!(
                "expected {} values, found {}",
                NUM_CELLS,
                values.len()
            )));
        }
        let mut cells = [[BLANK; SIZE]; SIZE];
        for (index, &value) in values.iter().enumerate() {
            cells[index / SIZE][index % SIZE] = value;
        }
        Self::new(cells)
    }

    /// The canonical solved board, tiles `1..=15` in order with the blank in
    /// the bottom right corner.
    pub fn goal() -> Self {
        let mut cells = [[BLANK; SIZE]; SIZE];
        for index in 0..NUM_CELLS - 1 {
            cells[index / SIZE][index % SIZE] = (index + 1) as u8;
        }
        Self { cells }
    }

    /// Parses a board from whitespace separated text, see
    /// [`crate::parsers::parse_board_values`].
    pub fn from_text(text: &str) -> Result<Self, PuzzleError> {
        let (_, values) = parse_board_values(text).map_err(|e| {
            PuzzleError::Parse(match e {
                nom::Err::Error(e) | nom::Err::Failure(e) => match error_position(&e) {
                    Some(offset) => format!("unexpected input at offset {}", offset),
                    None => "unexpected input".to_string(),
                },
                nom::Err::Incomplete(_) => "incomplete input".to_string(),
            })
        })?;
        if values.len() != NUM_CELLS {
            return Err(PuzzleError::Parse(format!(
                "expected {} values, found {}",
                NUM_CELLS,
                values.len()
            )));
        }
        Self::from_row_major(&values)
    }

    pub fn from_path(path: &Path) -> Result<Self, PuzzleError> {
        let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn cells(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over the cells in row-major order.
    pub fn row_major(&self) -> impl Iterator<Item = u8> + Clone + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn key(&self) -> StateKey {
        StateKey::encode(self)
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::goal()
    }

    /// Finds the blank cell.
    pub fn locate_blank(&self) -> Result<Position, PuzzleError> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .find(|&(row, col)| self.cells[row][col] == BLANK)
            .ok_or(PuzzleError::Invariant(*self))
    }

    /// Returns a copy of this board with the two cells swapped.
    pub fn swapped(&self, a: Position, b: Position) -> Self {
        let mut cells = self.cells;
        let tmp = cells[a.0][a.1];
        cells[a.0][a.1] = cells[b.0][b.1];
        cells[b.0][b.1] = tmp;
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl TryFrom<[[u8; SIZE]; SIZE]> for Board {
    type Error = PuzzleError;

    fn try_from(cells: [[u8; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl Index<Position> for Board {
    type Output = u8;

    fn index(&self, (row, col): Position) -> &Self::Output {
        &self.cells[row][col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>2}", value)?;
            }
        }
        Ok(())
    }
}
