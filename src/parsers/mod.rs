//! Parsers for the plain text board format: sixteen whitespace separated
//! integers in row-major order, with `;` starting a comment that runs to the
//! end of the line.

mod board;
mod comments;
mod utilities;

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

// Parsers
pub use board::{parse_board_values, parse_cell_value};
pub use comments::ignore_single_line_comment;

// Parser combinators
pub(crate) use utilities::{space_separated_list1, surrounding_whitespace};
