//! The parser trait

use super::combinators::{on_match, one_or_more, zero_or_more, OnMatch, OneOrMore, ZeroOrMore};
use super::cursor::{Cursor, Match, Outcome};

/// Something that can be applied at a cursor.
///
/// Any `fn(Cursor) -> Outcome<N>` is a parser, which is how grammar rules are
/// written: as named functions that may call each other recursively.
pub trait Parser<N> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N>;
}

impl<N, F> Parser<N> for F
where
    F: for<'a> Fn(Cursor<'a>) -> Outcome<'a, N>,
{
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        self(input)
    }
}

/// Method-style access to the unary combinators.
pub trait ParserExt<N>: Parser<N> + Sized {
    /// See [`on_match`](super::on_match).
    fn on_match<F>(self, transform: F) -> OnMatch<Self, F>
    where
        F: Fn(&mut Match<'_, N>),
    {
        on_match(self, transform)
    }

    /// See [`zero_or_more`](super::zero_or_more).
    fn zero_or_more(self) -> ZeroOrMore<Self> {
        zero_or_more(self)
    }

    /// See [`one_or_more`](super::one_or_more).
    fn one_or_more(self) -> OneOrMore<Self> {
        one_or_more(self)
    }
}

impl<N, P: Parser<N>> ParserExt<N> for P {}
