//! Provides parsers for the board text format.

use crate::parsers::{space_separated_list1, surrounding_whitespace, ParseResult, Span};
use nom::{character::complete::u8 as cell_value, combinator::all_consuming};

/// Parses a single cell value, a non-negative integer that fits in a `u8`.
pub fn parse_cell_value<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, u8> {
    cell_value(input.into())
}

/// Parses every value of a board file in row-major order. The whole input
/// must be consumed; the number of values and whether they form a valid
/// board are checked by [`Board::from_text`](crate::search::Board::from_text).
///
/// ## Example
/// ```
/// # use wrapfifteen::parsers::{parse_board_values, Span};
/// let (_, values) = parse_board_values(Span::new("1 2 3 4\n5 6 ; rest omitted\n")).unwrap();
/// assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn parse_board_values<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<u8>> {
    all_consuming(surrounding_whitespace(space_separated_list1(
        parse_cell_value,
    )))(input.into())
}
