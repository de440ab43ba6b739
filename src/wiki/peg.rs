//! Parsing Expression Grammar combinators
//!
//! A parser is anything that turns a [`Cursor`] into an [`Outcome`]: `None` when
//! it does not match, or a [`Match`] describing how much text it consumed and
//! what it produced. Parsers are plain values (or plain functions) composed with
//! the combinators in this module:
//!
//! ```text
//! any, end, literal(s), pattern(re)       primitives
//! not(p), and(p)                          lookahead, never consume
//! sequence((p1, .., pn))                  all in order, or nothing
//! first_of((p1, .., pn))                  ordered choice
//! zero_or_more(p), one_or_more(p)         greedy repetition
//! on_match(p, f)                          attach a node to a match
//! ```
//!
//! The engine knows nothing about the document it is parsing: every [`Match`]
//! carries an optional node of a caller-chosen type `N`, and grammars attach
//! their nodes through [`on_match`].
//!
//! There is no memoization. A rule tried twice at the same offset is parsed
//! twice, so heavily backtracking grammars can take exponential time on
//! adversarial input. Callers should bound input size.

mod combinators;
mod cursor;
mod parser;
mod primitives;

pub use combinators::{
    and, first_of, not, on_match, one_or_more, sequence, zero_or_more, And, Choice, FirstOf, Not,
    OnMatch, OneOrMore, Seq, Sequence, ZeroOrMore,
};
pub use cursor::{Cursor, Match, Outcome};
pub use parser::{Parser, ParserExt};
pub use primitives::{anchored, any, end, literal, pattern, Literal, Pattern};
