//! Terminals: line ends, spacing, capitalized words and delimiters

use once_cell::sync::Lazy;
use regex::Regex;

use super::Outcome;
use crate::wiki::peg::{
    and, anchored, end, first_of, literal, one_or_more, pattern, sequence, zero_or_more, Cursor,
    Parser,
};

static INITIAL_CAP: Lazy<Regex> = Lazy::new(|| anchored("[A-Z]").unwrap());
static LOWERCASE: Lazy<Regex> = Lazy::new(|| anchored("[a-z]").unwrap());

/// `\r\n`, `\n`, or the end of the text (which consumes nothing).
pub fn eol(input: Cursor<'_>) -> Outcome<'_> {
    first_of((literal("\r\n"), literal("\n"), end)).parse(input)
}

pub fn whitespace(input: Cursor<'_>) -> Outcome<'_> {
    first_of((literal(" "), literal("\t"))).parse(input)
}

pub fn spacing(input: Cursor<'_>) -> Outcome<'_> {
    zero_or_more(whitespace).parse(input)
}

pub fn initial_cap(input: Cursor<'_>) -> Outcome<'_> {
    pattern(&INITIAL_CAP).parse(input)
}

pub fn lowercase(input: Cursor<'_>) -> Outcome<'_> {
    pattern(&LOWERCASE).parse(input)
}

/// One capitalized word segment, e.g. `Wiki`.
pub fn cap_word(input: Cursor<'_>) -> Outcome<'_> {
    sequence((initial_cap, one_or_more(lowercase))).parse(input)
}

pub fn bold_delim(input: Cursor<'_>) -> Outcome<'_> {
    literal("*").parse(input)
}

pub fn italics_delim(input: Cursor<'_>) -> Outcome<'_> {
    literal("/").parse(input)
}

/// Closing `*`, or the end of the line without consuming it.
pub fn bold_end(input: Cursor<'_>) -> Outcome<'_> {
    first_of((bold_delim, and(eol))).parse(input)
}

/// Closing `/`, or the end of the line without consuming it.
pub fn italics_end(input: Cursor<'_>) -> Outcome<'_> {
    first_of((italics_delim, and(eol))).parse(input)
}

pub fn h1(input: Cursor<'_>) -> Outcome<'_> {
    literal("!!!!").parse(input)
}

pub fn h2(input: Cursor<'_>) -> Outcome<'_> {
    literal("!!!").parse(input)
}

pub fn h3(input: Cursor<'_>) -> Outcome<'_> {
    literal("!!").parse(input)
}

/// Header marker plus the spacing after it. Longer markers are tried first.
pub fn header_intro(input: Cursor<'_>) -> Outcome<'_> {
    sequence((first_of((h1, h2, h3)), spacing)).parse(input)
}
