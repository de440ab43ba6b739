//! HTML emission
//!
//! Rendering walks the tree depth-first, left to right, and hands each HTML
//! fragment to a sink as soon as it is produced:
//!
//! ```text
//! Text(s)             s
//! Link(s)             <a href='s'>s</a>
//! Bold / Italics      <b>..</b> / <i>..</i>
//! Header(level)       <h1>..</h1> (h2, h3)
//! Paragraph           <p>..</p>
//! Document            <div>..</div>
//! ```
//!
//! Text is written as-is. Nothing is HTML-escaped, so markup containing `<` or
//! `&` reaches the output unchanged.

use crate::wiki::ast::{visit_children, visit_node, HeaderLevel, Node, Visitor};

/// Stream the HTML for `node` into `sink`.
pub fn render<F: FnMut(&str)>(node: &Node, sink: F) {
    let mut emitter = HtmlEmitter { sink };
    visit_node(&mut emitter, node);
}

/// Render `node` into a single string.
pub fn to_html(node: &Node) -> String {
    let mut html = String::new();
    render(node, |fragment| html.push_str(fragment));
    html
}

struct HtmlEmitter<F> {
    sink: F,
}

impl<F: FnMut(&str)> HtmlEmitter<F> {
    fn wrap(&mut self, tag: &str, children: &[Node]) {
        (self.sink)("<");
        (self.sink)(tag);
        (self.sink)(">");
        visit_children(self, children);
        (self.sink)("</");
        (self.sink)(tag);
        (self.sink)(">");
    }
}

impl<F: FnMut(&str)> Visitor for HtmlEmitter<F> {
    fn visit_text(&mut self, text: &str) {
        (self.sink)(text);
    }

    fn visit_link(&mut self, target: &str) {
        (self.sink)("<a href='");
        (self.sink)(target);
        (self.sink)("'>");
        (self.sink)(target);
        (self.sink)("</a>");
    }

    fn visit_bold(&mut self, children: &[Node]) {
        self.wrap("b", children);
    }

    fn visit_italics(&mut self, children: &[Node]) {
        self.wrap("i", children);
    }

    fn visit_header(&mut self, level: HeaderLevel, children: &[Node]) {
        self.wrap(level.tag(), children);
    }

    fn visit_paragraph(&mut self, children: &[Node]) {
        self.wrap("p", children);
    }

    fn visit_document(&mut self, children: &[Node]) {
        self.wrap("div", children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_spans() {
        let node = Node::Paragraph(vec![
            Node::Bold(vec![
                Node::Text("bold ".into()),
                Node::Italics(vec![Node::Text("both".into())]),
            ]),
            Node::Text(" plain".into()),
        ]);
        assert_eq!(to_html(&node), "<p><b>bold <i>both</i></b> plain</p>");
    }

    #[test]
    fn renders_link_with_target() {
        let node = Node::Link("FrontPage".into());
        assert_eq!(to_html(&node), "<a href='FrontPage'>FrontPage</a>");
    }

    #[test]
    fn renders_header_tag_by_level() {
        let node = Node::Header {
            level: HeaderLevel::H3,
            children: vec![Node::Text("Small".into())],
        };
        assert_eq!(to_html(&node), "<h3>Small</h3>");
    }

    #[test]
    fn empty_document_is_empty_div() {
        assert_eq!(to_html(&Node::Document(vec![])), "<div></div>");
    }

    #[test]
    fn text_is_not_escaped() {
        let node = Node::Text("<script>&".into());
        assert_eq!(to_html(&node), "<script>&");
    }

    #[test]
    fn sink_sees_fragments_in_order() {
        let node = Node::Italics(vec![Node::Text("x".into())]);
        let mut fragments = Vec::new();
        render(&node, |fragment| fragments.push(fragment.to_string()));
        assert_eq!(fragments.concat(), "<i>x</i>");
        assert_eq!(fragments.first().map(String::as_str), Some("<"));
        assert_eq!(fragments.last().map(String::as_str), Some(">"));
    }
}
