//! Primitive parsers: `any`, `end`, `literal` and `pattern`

use regex::Regex;

use super::cursor::{Cursor, Match, Outcome};
use super::parser::Parser;

/// Matches exactly one character.
pub fn any<N>(input: Cursor<'_>) -> Outcome<'_, N> {
    let ch = input.rest().chars().next()?;
    let len = ch.len_utf8();
    Some(Match::leaf(input.slice(len), len))
}

/// Matches only at the end of the text, consuming nothing.
pub fn end<N>(input: Cursor<'_>) -> Outcome<'_, N> {
    if input.is_at_end() {
        Some(Match::empty())
    } else {
        None
    }
}

/// Case-sensitive match of a fixed string.
#[derive(Debug, Clone, Copy)]
pub struct Literal<'s> {
    expected: &'s str,
}

pub fn literal(expected: &str) -> Literal<'_> {
    Literal { expected }
}

impl<N> Parser<N> for Literal<'_> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        if input.rest().starts_with(self.expected) {
            let len = self.expected.len();
            Some(Match::leaf(input.slice(len), len))
        } else {
            None
        }
    }
}

/// Regular expression match that must start exactly at the cursor.
///
/// A match found further ahead in the text is a failure. Regexes built with
/// [`anchored`] never search ahead in the first place.
#[derive(Debug, Clone, Copy)]
pub struct Pattern<'r> {
    regex: &'r Regex,
}

pub fn pattern(regex: &Regex) -> Pattern<'_> {
    Pattern { regex }
}

/// Compile `source` so that it can only match at the start of the haystack.
pub fn anchored(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{source})"))
}

impl<N> Parser<N> for Pattern<'_> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        let found = self.regex.find(input.rest())?;
        if found.start() != 0 {
            return None;
        }
        let len = found.end();
        Some(Match::leaf(input.slice(len), len))
    }
}
