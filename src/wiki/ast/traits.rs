//! Visitor over the document tree

use super::node::{HeaderLevel, Node};

/// Callbacks for each node variant.
///
/// Container callbacks walk their children by default, so a visitor only
/// needs to override the variants it cares about.
pub trait Visitor {
    fn visit_text(&mut self, _text: &str) {}

    fn visit_link(&mut self, _target: &str) {}

    fn visit_bold(&mut self, children: &[Node]) {
        visit_children(self, children);
    }

    fn visit_italics(&mut self, children: &[Node]) {
        visit_children(self, children);
    }

    fn visit_header(&mut self, _level: HeaderLevel, children: &[Node]) {
        visit_children(self, children);
    }

    fn visit_paragraph(&mut self, children: &[Node]) {
        visit_children(self, children);
    }

    fn visit_document(&mut self, children: &[Node]) {
        visit_children(self, children);
    }
}

/// Dispatch `node` to the matching visitor callback.
pub fn visit_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    match node {
        Node::Text(text) => visitor.visit_text(text),
        Node::Link(target) => visitor.visit_link(target),
        Node::Bold(children) => visitor.visit_bold(children),
        Node::Italics(children) => visitor.visit_italics(children),
        Node::Header { level, children } => visitor.visit_header(*level, children),
        Node::Paragraph(children) => visitor.visit_paragraph(children),
        Node::Document(children) => visitor.visit_document(children),
    }
}

/// Visit `children` in order.
pub fn visit_children<V: Visitor + ?Sized>(visitor: &mut V, children: &[Node]) {
    for child in children {
        visit_node(visitor, child);
    }
}
