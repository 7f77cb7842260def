use crate::search::{Board, StateKey};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the puzzle core and its input/output surfaces.
///
/// Running out of search budget is not an error, see
/// [`SearchResult::BudgetExceeded`](crate::search::search_engines::SearchResult).
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("malformed state key: {0}")]
    Format(String),
    #[error("board has no blank tile:\n{0}")]
    Invariant(Board),
    #[error("predecessor chain revisits state:\n{0}")]
    InconsistentPath(StateKey),
    #[error("boards are not one blank move apart:\n{from}\n->\n{to}")]
    InvalidTransition { from: Board, to: Board },
    #[error("could not parse board: {0}")]
    Parse(String),
    #[error("not a permutation of 0..=15: {0}")]
    InvalidBoard(String),
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Config(#[from] toml::de::Error),
}
