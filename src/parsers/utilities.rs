//! Utility parsers.

use nom::{
    character::complete::{multispace0, multispace1},
    multi::separated_list1,
    sequence::{delimited, preceded},
};

use crate::parsers::{ignore_single_line_comment, ParseResult, Span};

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace, returning the output of `inner`. This parser
/// also suppresses line comments.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(preceded(multispace0, ignore_single_line_comment), inner)
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading and trailing whitespace, returning the output of `inner`.
/// Also suppresses line comments.
pub fn surrounding_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(
        preceded(multispace0, ignore_single_line_comment),
        inner,
        preceded(multispace0, ignore_single_line_comment),
    )
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes a non-empty whitespace separated list, returning the outputs of
/// `inner`.
pub fn space_separated_list1<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, Vec<O>>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    leading_whitespace(separated_list1(
        multispace1,
        preceded(ignore_single_line_comment, inner),
    ))
}
