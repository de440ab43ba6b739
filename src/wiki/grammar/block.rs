//! Block rules: headers, paragraphs and the document itself

use super::inline::inline_content;
use super::lexical::{eol, header_intro, spacing};
use super::{lift_part, repeated_nodes, Outcome};
use crate::wiki::ast::{HeaderLevel, Node};
use crate::wiki::peg::{
    end, first_of, one_or_more, sequence, zero_or_more, Cursor, Match, Parser, ParserExt,
};

/// The whole page: blocks up to the end of the text.
pub fn document(input: Cursor<'_>) -> Outcome<'_> {
    sequence((zero_or_more(block), end))
        .on_match(into_document)
        .parse(input)
}

/// A header or paragraph, plus any blank lines after it.
pub fn block(input: Cursor<'_>) -> Outcome<'_> {
    sequence((
        first_of((header, paragraph)),
        zero_or_more(sequence((spacing, eol))),
    ))
    .on_match(lift_first)
    .parse(input)
}

pub fn header(input: Cursor<'_>) -> Outcome<'_> {
    sequence((header_intro, one_or_more(inline_content), eol))
        .on_match(into_header)
        .parse(input)
}

pub fn paragraph(input: Cursor<'_>) -> Outcome<'_> {
    sequence((zero_or_more(inline_content), eol))
        .on_match(into_paragraph)
        .parse(input)
}

fn into_document(m: &mut Match<'_, Node>) {
    m.node = Some(Node::Document(repeated_nodes(m, 0)));
}

fn into_header(m: &mut Match<'_, Node>) {
    let level = m.parts.first().and_then(|intro| HeaderLevel::from_marker(intro.text));
    if let Some(level) = level {
        m.node = Some(Node::Header {
            level,
            children: repeated_nodes(m, 1),
        });
    }
}

fn into_paragraph(m: &mut Match<'_, Node>) {
    m.node = Some(Node::Paragraph(repeated_nodes(m, 0)));
}

fn lift_first(m: &mut Match<'_, Node>) {
    lift_part(m, 0);
}
