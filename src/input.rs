//! Coordinate input: the parser and the collaborator trait a human proxy
//! reads from.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Why a line of input is not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected two numbers, got {0} values")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Recoverable: the player is asked again.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// No more input will arrive.
    #[error("input closed")]
    Closed,
}

/// Source of 1-based `(row, col)` pairs.
pub trait CoordinateSource {
    fn request_coordinate(&mut self) -> Result<(i32, i32), InputError>;
}

/// Parse `"row col"`: exactly two unsigned decimal numbers separated by
/// whitespace. Values are returned as typed, still 1-based.
pub fn parse_coordinate(line: &str) -> Result<(i32, i32), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(ParseError::WrongTokenCount(tokens.len()));
    };
    Ok((parse_number(row)?, parse_number(col)?))
}

fn parse_number(token: &str) -> Result<i32, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NotANumber(token.to_string()));
    }
    token
        .parse::<i32>()
        .map_err(|_| ParseError::NotANumber(token.to_string()))
}

/// Adapts any iterator of lines into a [`CoordinateSource`]. Exhausting the
/// iterator closes the source.
pub struct LineSource<I> {
    lines: I,
}

impl<I> LineSource<I> {
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I, S> CoordinateSource for LineSource<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn request_coordinate(&mut self) -> Result<(i32, i32), InputError> {
        let line = self.lines.next().ok_or(InputError::Closed)?;
        Ok(parse_coordinate(line.as_ref())?)
    }
}
