use crate::{search::Board, PuzzleError};
use strum_macros::{Display, EnumString};

/// The direction the blank moves in a single step. A wraparound step is
/// named by how the blank's coordinate changed, so the blank jumping from
/// the top row to the bottom row is [`Direction::Down`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Direction {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "D")]
    Down,
}

impl Direction {
    /// The direction of the blank from `from` to `to`. Exactly one of the
    /// blank's row and column must change.
    pub fn between(from: &Board, to: &Board) -> Result<Self, PuzzleError> {
        let (r1, c1) = from.locate_blank()?;
        let (r2, c2) = to.locate_blank()?;
        match (r1 == r2, c1 == c2) {
            (true, false) if c2 < c1 => Ok(Direction::Left),
            (true, false) => Ok(Direction::Right),
            (false, true) if r2 < r1 => Ok(Direction::Up),
            (false, true) => Ok(Direction::Down),
            _ => Err(PuzzleError::InvalidTransition {
                from: *from,
                to: *to,
            }),
        }
    }
}

/// Converts a sequence of boards into the moves of the blank between them.
pub fn to_directions(boards: &[Board]) -> Result<Vec<Direction>, PuzzleError> {
    boards
        .windows(2)
        .map(|pair| Direction::between(&pair[0], &pair[1]))
        .collect()
}
