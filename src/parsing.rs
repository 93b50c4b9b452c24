//! # Parsing Utilities
//!
//! This module provides the field-level parsers used by the per-format
//! structural checks, plus a combinator for ensuring complete consumption of
//! the input.

use nom::{
    IResult, Input, Parser,
    character::complete::{alphanumeric1, char, digit0, digit1, one_of},
    combinator::{eof, opt, recognize, verify},
    error::ParseError,
    sequence::terminated,
};

/// Recognizes an unsigned decimal number: one or more digits, optionally
/// followed by a `.` and a (possibly empty) fractional part.
///
/// # Examples
///
/// ```rust
/// use nmea_route::parsing::numeric;
///
/// assert_eq!(numeric("4916.45,N"), Ok((",N", "4916.45")));
/// assert_eq!(numeric("225444"), Ok(("", "225444")));
/// assert!(numeric(",").is_err());
/// assert!(numeric("-1.0").is_err());
/// ```
pub fn numeric(i: &str) -> IResult<&str, &str> {
    recognize((digit1, opt((char('.'), digit0)))).parse(i)
}

/// Recognizes a decimal number with an optional leading `+` or `-`.
///
/// # Examples
///
/// ```rust
/// use nmea_route::parsing::signed_numeric;
///
/// assert_eq!(signed_numeric("-12.5,M"), Ok((",M", "-12.5")));
/// assert_eq!(signed_numeric("545.4"), Ok(("", "545.4")));
/// ```
pub fn signed_numeric(i: &str) -> IResult<&str, &str> {
    recognize((opt(one_of("+-")), numeric)).parse(i)
}

/// Recognizes the checksum characters after the `*` delimiter: at least two
/// alphanumeric characters.
pub fn checksum_chars(i: &str) -> IResult<&str, &str> {
    verify(alphanumeric1, |cc: &str| cc.len() >= 2).parse(i)
}

/// Ensures that the parser consumes all input.
///
/// Runs `f` and then fails with [`nom::error::ErrorKind::Eof`] unless nothing
/// is left over.
///
/// # Examples
///
/// ```rust
/// use nmea_route::parsing::{consumed, numeric};
/// use nom::{IResult, Parser};
///
/// let mut parser = consumed(numeric);
/// let result: IResult<_, _> = parser.parse("123.4");
/// assert!(result.is_ok());
///
/// // This fails because ",N" is not consumed
/// let result: IResult<_, _> = parser.parse("123.4,N");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E, F>(f: F) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    E: ParseError<I>,
    F: Parser<I, Error = E>,
{
    terminated(f, eof)
}
