use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::{char, multispace0};
use nom::combinator::{opt, value};
use nom::sequence::{pair, terminated, tuple};

/// Consumes any number of `;` comments, each running to the end of its line,
/// together with the whitespace that follows them.
pub fn ignore_single_line_comment<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        opt(terminated(
            pair(char(';'), opt(is_not("\r\n"))),
            tuple((multispace0, opt(ignore_single_line_comment))),
        )),
    )(input.into())
}
