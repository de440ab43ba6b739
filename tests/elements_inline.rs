//! Inline markup: text, links, bold and italics
//!
//! Each case is a single paragraph; the expected HTML is the paragraph's
//! rendering inside the document `div`.

use miniwiki::wiki::ast::NodeKind;
use miniwiki::wiki::processor::{markup_to_html, parse_document};
use miniwiki::wiki::testing::assert_tree;
use rstest::rstest;

#[rstest]
#[case::plain("hello world", "<p>hello world</p>")]
#[case::wiki_word(
    "ThisIsSomeWikiWord",
    "<p><a href='ThisIsSomeWikiWord'>ThisIsSomeWikiWord</a></p>"
)]
#[case::single_cap_word_is_text("Hello there", "<p>Hello there</p>")]
#[case::link_mid_sentence(
    "See FrontPage now",
    "<p>See <a href='FrontPage'>FrontPage</a> now</p>"
)]
#[case::bold("a *b* c", "<p>a <b>b</b> c</p>")]
#[case::italics("a /b/ c", "<p>a <i>b</i> c</p>")]
#[case::adjacent_spans("*one*/two/", "<p><b>one</b><i>two</i></p>")]
#[case::link_in_bold(
    "*HomePage*",
    "<p><b><a href='HomePage'>HomePage</a></b></p>"
)]
#[case::italics_in_bold(
    "*this is bold /and emphasised/ too*",
    "<p><b>this is bold <i>and emphasised</i> too</b></p>"
)]
#[case::bold_in_italics("/a *b* c/", "<p><i>a <b>b</b> c</i></p>")]
#[case::italics_closes_before_reopening(
    "/this is /*not*/ nested/",
    "<p><i>this is </i><b>not</b><i> nested</i></p>"
)]
#[case::unclosed_bold("*runs to the end", "<p><b>runs to the end</b></p>")]
#[case::unclosed_italics_inside_bold(
    "*this is bold /and emphasised too*",
    "<p><b>this is bold <i>and emphasised too</i></b></p>"
)]
#[case::both_unclosed(
    "*bold /and italic",
    "<p><b>bold <i>and italic</i></b></p>"
)]
#[case::no_escaping("a < b & c", "<p>a < b & c</p>")]
fn renders_inline(#[case] markup: &str, #[case] paragraph: &str) {
    let html = markup_to_html(markup).unwrap();
    assert_eq!(html, format!("<div>{paragraph}</div>"));
}

#[test]
fn plain_words_have_no_links() {
    let html = markup_to_html("not a word\n").unwrap();
    assert!(!html.contains("<a"));
}

#[test]
fn nested_tree_shape() {
    let doc = parse_document("*this is bold /and emphasised/ too*\n").unwrap();
    assert_tree(&doc).child_count(1).child(0, |para| {
        para.kind(NodeKind::Paragraph)
            .child_kinds(&[NodeKind::Bold])
            .child(0, |bold| {
                bold.child_kinds(&[NodeKind::Text, NodeKind::Italics, NodeKind::Text])
                    .child(1, |italics| {
                        italics.text("and emphasised").has_no_links();
                    });
            });
    });
}

#[test]
fn dangling_italics_closes_inside_bold() {
    let doc = parse_document("*this is bold /and emphasised too*\n").unwrap();
    assert_tree(&doc).child(0, |para| {
        para.child_count(1).child(0, |bold| {
            bold.kind(NodeKind::Bold)
                .child_kinds(&[NodeKind::Text, NodeKind::Italics])
                .child(1, |italics| {
                    italics.text("and emphasised too");
                });
        });
    });
}

#[rstest]
#[case::lone_bold_delimiter("a *")]
#[case::empty_bold("**")]
#[case::empty_italics("//")]
fn empty_spans_do_not_parse(#[case] markup: &str) {
    assert!(parse_document(markup).is_err());
}
