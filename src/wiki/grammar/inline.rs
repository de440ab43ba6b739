//! Inline rules: links, text, bold and italics

use super::lexical::{bold_delim, bold_end, cap_word, eol, italics_delim, italics_end};
use super::{lift_part, repeated_nodes, Outcome};
use crate::wiki::ast::Node;
use crate::wiki::peg::{
    and, any, first_of, not, one_or_more, sequence, Cursor, Match, Parser, ParserExt,
};

pub fn inline_content(input: Cursor<'_>) -> Outcome<'_> {
    first_of((bold, italics, link, text)).parse(input)
}

/// Two or more capitalized words run together, e.g. `FrontPage`.
pub fn link(input: Cursor<'_>) -> Outcome<'_> {
    sequence((cap_word, one_or_more(cap_word)))
        .on_match(into_link)
        .parse(input)
}

/// Everything up to the next line end, delimiter or link.
pub fn text(input: Cursor<'_>) -> Outcome<'_> {
    one_or_more(sequence((
        not(first_of((eol, bold_delim, italics_delim, link))),
        any,
    )))
    .on_match(into_text)
    .parse(input)
}

pub fn bold(input: Cursor<'_>) -> Outcome<'_> {
    sequence((bold_delim, one_or_more(bold_content), bold_end))
        .on_match(into_bold)
        .parse(input)
}

pub fn bold_content(input: Cursor<'_>) -> Outcome<'_> {
    sequence((
        not(bold_end),
        first_of((link, italics_without_bold, text)),
    ))
    .on_match(lift_second)
    .parse(input)
}

/// Italics inside bold. Ends at `/`, or where the enclosing bold ends.
pub fn italics_without_bold(input: Cursor<'_>) -> Outcome<'_> {
    sequence((
        italics_delim,
        one_or_more(italics_without_bold_content),
        first_of((italics_end, and(bold_end))),
    ))
    .on_match(into_italics)
    .parse(input)
}

pub fn italics_without_bold_content(input: Cursor<'_>) -> Outcome<'_> {
    sequence((not(nested_end), first_of((link, text))))
        .on_match(lift_second)
        .parse(input)
}

pub fn italics(input: Cursor<'_>) -> Outcome<'_> {
    sequence((italics_delim, one_or_more(italics_content), italics_end))
        .on_match(into_italics)
        .parse(input)
}

pub fn italics_content(input: Cursor<'_>) -> Outcome<'_> {
    sequence((
        not(italics_end),
        first_of((link, bold_without_italics, text)),
    ))
    .on_match(lift_second)
    .parse(input)
}

/// Bold inside italics. Ends at `*`, or where the enclosing italics end.
pub fn bold_without_italics(input: Cursor<'_>) -> Outcome<'_> {
    sequence((
        bold_delim,
        one_or_more(bold_without_italics_content),
        first_of((bold_end, and(italics_end))),
    ))
    .on_match(into_bold)
    .parse(input)
}

pub fn bold_without_italics_content(input: Cursor<'_>) -> Outcome<'_> {
    sequence((not(nested_end), first_of((link, text))))
        .on_match(lift_second)
        .parse(input)
}

/// Where content of a nested span stops: either span's end.
fn nested_end(input: Cursor<'_>) -> Outcome<'_> {
    first_of((italics_end, and(bold_end))).parse(input)
}

fn into_link(m: &mut Match<'_, Node>) {
    m.node = Some(Node::Link(m.text.to_string()));
}

fn into_text(m: &mut Match<'_, Node>) {
    m.parts.clear();
    m.node = Some(Node::Text(m.text.to_string()));
}

fn into_bold(m: &mut Match<'_, Node>) {
    m.node = Some(Node::Bold(repeated_nodes(m, 1)));
}

fn into_italics(m: &mut Match<'_, Node>) {
    m.node = Some(Node::Italics(repeated_nodes(m, 1)));
}

fn lift_second(m: &mut Match<'_, Node>) {
    lift_part(m, 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with<'a>(rule: fn(Cursor<'a>) -> Outcome<'a>, text: &'a str) -> Outcome<'a> {
        rule(Cursor::new(text))
    }

    fn plain(text: &str) -> Node {
        Node::Text(text.to_string())
    }

    #[test]
    fn link_matches_wiki_word() {
        let m = parse_with(link, "ThisIsSomeWikiWord").expect("wiki word");
        assert_eq!(m.consumed, 18);
        assert_eq!(m.node, Some(Node::Link("ThisIsSomeWikiWord".into())));
    }

    #[test]
    fn link_needs_two_words() {
        assert!(parse_with(link, "This is not a wikiword").is_none());
        assert!(parse_with(link, "Wiki").is_none());
    }

    #[test]
    fn link_stops_at_non_letter() {
        let m = parse_with(link, "WikiWord links somewhere").unwrap();
        assert_eq!(m.text, "WikiWord");
    }

    #[test]
    fn text_takes_everything_plain() {
        let m = parse_with(text, "This is some plain text").unwrap();
        assert_eq!(m.text, "This is some plain text");
        assert_eq!(m.node, Some(plain("This is some plain text")));
    }

    #[test]
    fn text_stops_before_link_and_delimiters() {
        let m = parse_with(text, "This is a WikiWord going somewhere else").unwrap();
        assert_eq!(m.text, "This is a ");
        let m = parse_with(text, "This has *bold statements* in it").unwrap();
        assert_eq!(m.text, "This has ");
        let m = parse_with(text, "This has /emphasized statements/ in it").unwrap();
        assert_eq!(m.text, "This has ");
        let m = parse_with(text, "line one\nline two").unwrap();
        assert_eq!(m.text, "line one");
    }

    #[test]
    fn text_needs_at_least_one_char() {
        assert!(parse_with(text, "*").is_none());
        assert!(parse_with(text, "").is_none());
    }

    #[test]
    fn inline_content_picks_kind() {
        let m = parse_with(inline_content, "This is some plain text").unwrap();
        assert_eq!(m.node, Some(plain("This is some plain text")));
        let m = parse_with(inline_content, "WikiWord links somewhere").unwrap();
        assert_eq!(m.text, "WikiWord");
        assert_eq!(m.node, Some(Node::Link("WikiWord".into())));
    }

    #[test]
    fn bold_consumes_delimiters() {
        let m = parse_with(bold, "*This is bold text* with non bold following").unwrap();
        assert_eq!(m.text, "*This is bold text*");
        assert_eq!(m.node, Some(Node::Bold(vec![plain("This is bold text")])));
    }

    #[test]
    fn bold_with_links() {
        let source = "*This text LinksSomewhere and SomewhereElse too*";
        let m = parse_with(bold, source).unwrap();
        assert_eq!(m.consumed, source.len());
        assert_eq!(
            m.node,
            Some(Node::Bold(vec![
                plain("This text "),
                Node::Link("LinksSomewhere".into()),
                plain(" and "),
                Node::Link("SomewhereElse".into()),
                plain(" too"),
            ]))
        );
    }

    #[test]
    fn bold_closes_at_line_end() {
        let m = parse_with(bold, "*unclosed\nnext").unwrap();
        assert_eq!(m.text, "*unclosed");
        assert_eq!(m.node, Some(Node::Bold(vec![plain("unclosed")])));
    }

    #[test]
    fn empty_bold_is_not_bold() {
        assert!(parse_with(bold, "**").is_none());
        assert!(parse_with(bold, "*\n").is_none());
    }

    #[test]
    fn italics_inside_bold() {
        let m = parse_with(bold, "*this is bold /and emphasised/ too*").unwrap();
        assert_eq!(
            m.node,
            Some(Node::Bold(vec![
                plain("this is bold "),
                Node::Italics(vec![plain("and emphasised")]),
                plain(" too"),
            ]))
        );
    }

    #[test]
    fn dangling_italics_closes_with_bold() {
        let m = parse_with(bold, "*this is bold /and emphasised too*").unwrap();
        assert_eq!(m.text, "*this is bold /and emphasised too*");
        assert_eq!(
            m.node,
            Some(Node::Bold(vec![
                plain("this is bold "),
                Node::Italics(vec![plain("and emphasised too")]),
            ]))
        );
    }

    #[test]
    fn bold_inside_italics() {
        let m = parse_with(italics, "/a *b* c/").unwrap();
        assert_eq!(
            m.node,
            Some(Node::Italics(vec![
                plain("a "),
                Node::Bold(vec![plain("b")]),
                plain(" c"),
            ]))
        );
    }

    #[test]
    fn dangling_bold_closes_with_italics() {
        let m = parse_with(italics, "/a *b c/ d").unwrap();
        assert_eq!(m.text, "/a *b c/");
        assert_eq!(
            m.node,
            Some(Node::Italics(vec![
                plain("a "),
                Node::Bold(vec![plain("b c")]),
            ]))
        );
    }

    #[test]
    fn both_dangling_close_at_line_end_inner_first() {
        let m = parse_with(bold, "*a /b").unwrap();
        assert_eq!(
            m.node,
            Some(Node::Bold(vec![
                plain("a "),
                Node::Italics(vec![plain("b")]),
            ]))
        );
    }
}
