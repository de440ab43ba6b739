//! Combinators that build parsers out of parsers

use super::cursor::{Cursor, Match, Outcome};
use super::parser::Parser;

/// Negative lookahead: succeeds, consuming nothing, iff the inner parser fails.
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(P);

pub fn not<P>(parser: P) -> Not<P> {
    Not(parser)
}

impl<N, P: Parser<N>> Parser<N> for Not<P> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        match self.0.parse(input) {
            Some(_) => None,
            None => Some(Match::empty()),
        }
    }
}

/// Positive lookahead: succeeds iff the inner parser does, consuming nothing.
///
/// The inner match's text, node and parts are kept so that a grammar can look
/// at what was seen ahead.
#[derive(Debug, Clone, Copy)]
pub struct And<P>(P);

pub fn and<P>(parser: P) -> And<P> {
    And(parser)
}

impl<N, P: Parser<N>> Parser<N> for And<P> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        let inner = self.0.parse(input)?;
        Some(Match {
            consumed: 0,
            ..inner
        })
    }
}

/// Tuples of parsers applied one after another.
pub trait Sequence<N> {
    /// Apply every element in order, each starting where the previous one
    /// stopped. Returns the individual matches, or `None` if any fails.
    fn parse_each<'a>(&self, input: Cursor<'a>) -> Option<Vec<Match<'a, N>>>;
}

/// Tuples of parsers tried as alternatives.
pub trait Choice<N> {
    /// Try every element at `input` in order and return the first match.
    fn parse_first<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N>;
}

macro_rules! tuple_impls {
    ($($name:ident $idx:tt),+) => {
        impl<N, $($name: Parser<N>),+> Sequence<N> for ($($name,)+) {
            fn parse_each<'a>(&self, input: Cursor<'a>) -> Option<Vec<Match<'a, N>>> {
                let mut cursor = input;
                let mut parts = Vec::new();
                $(
                    let part = self.$idx.parse(cursor)?;
                    cursor = cursor.advance(part.consumed);
                    parts.push(part);
                )+
                Some(parts)
            }
        }

        impl<N, $($name: Parser<N>),+> Choice<N> for ($($name,)+) {
            fn parse_first<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
                $(
                    if let Some(found) = self.$idx.parse(input) {
                        return Some(found);
                    }
                )+
                None
            }
        }
    };
}

tuple_impls!(A 0);
tuple_impls!(A 0, B 1);
tuple_impls!(A 0, B 1, C 2);
tuple_impls!(A 0, B 1, C 2, D 3);
tuple_impls!(A 0, B 1, C 2, D 3, E 4);
tuple_impls!(A 0, B 1, C 2, D 3, E 4, F 5);
tuple_impls!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
tuple_impls!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// All parsers in order; fails as a whole if any of them fails.
///
/// The match spans everything consumed and keeps one part per element.
#[derive(Debug, Clone, Copy)]
pub struct Seq<T>(T);

pub fn sequence<T>(parsers: T) -> Seq<T> {
    Seq(parsers)
}

impl<N, T: Sequence<N>> Parser<N> for Seq<T> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        let parts = self.0.parse_each(input)?;
        let consumed = parts.iter().map(|part| part.consumed).sum();
        Some(Match {
            text: input.slice(consumed),
            consumed,
            node: None,
            parts,
        })
    }
}

/// Ordered choice: the first alternative that matches wins.
#[derive(Debug, Clone, Copy)]
pub struct FirstOf<T>(T);

pub fn first_of<T>(alternatives: T) -> FirstOf<T> {
    FirstOf(alternatives)
}

impl<N, T: Choice<N>> Parser<N> for FirstOf<T> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        self.0.parse_first(input)
    }
}

/// Greedily apply `parser` from `input` until it fails.
///
/// An application that consumes nothing would match forever at the same
/// offset, so it ends the loop and is not recorded.
fn repeat<'a, N, P: Parser<N>>(parser: &P, input: Cursor<'a>) -> Match<'a, N> {
    let mut cursor = input;
    let mut parts = Vec::new();
    while let Some(part) = parser.parse(cursor) {
        if part.consumed == 0 {
            break;
        }
        cursor = cursor.advance(part.consumed);
        parts.push(part);
    }
    let consumed = cursor.index() - input.index();
    Match {
        text: input.slice(consumed),
        consumed,
        node: None,
        parts,
    }
}

/// Zero or more repetitions; always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct ZeroOrMore<P>(P);

pub fn zero_or_more<P>(parser: P) -> ZeroOrMore<P> {
    ZeroOrMore(parser)
}

impl<N, P: Parser<N>> Parser<N> for ZeroOrMore<P> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        Some(repeat(&self.0, input))
    }
}

/// One or more repetitions.
#[derive(Debug, Clone, Copy)]
pub struct OneOrMore<P>(P);

pub fn one_or_more<P>(parser: P) -> OneOrMore<P> {
    OneOrMore(parser)
}

impl<N, P: Parser<N>> Parser<N> for OneOrMore<P> {
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        let first = self.0.parse(input)?;
        if first.consumed == 0 {
            return Some(Match {
                text: "",
                consumed: 0,
                node: None,
                parts: vec![first],
            });
        }
        let mut rest = repeat(&self.0, input.advance(first.consumed));
        rest.parts.insert(0, first);
        let consumed = rest.consumed + rest.parts[0].consumed;
        Some(Match {
            text: input.slice(consumed),
            consumed,
            node: None,
            parts: rest.parts,
        })
    }
}

/// Run `transform` on every successful match of the inner parser.
///
/// This is where grammars turn raw matches into nodes. The transform is never
/// called when the inner parser fails.
#[derive(Debug, Clone, Copy)]
pub struct OnMatch<P, F> {
    parser: P,
    transform: F,
}

pub fn on_match<N, P, F>(parser: P, transform: F) -> OnMatch<P, F>
where
    P: Parser<N>,
    F: Fn(&mut Match<'_, N>),
{
    OnMatch { parser, transform }
}

impl<N, P, F> Parser<N> for OnMatch<P, F>
where
    P: Parser<N>,
    F: Fn(&mut Match<'_, N>),
{
    fn parse<'a>(&self, input: Cursor<'a>) -> Outcome<'a, N> {
        let mut found = self.parser.parse(input)?;
        (self.transform)(&mut found);
        Some(found)
    }
}
