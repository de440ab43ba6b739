//! Fluent assertions over document trees
//!
//! ```rust,ignore
//! let doc = parse_document("!! Title\nSee FrontPage\n").unwrap();
//! assert_tree(&doc)
//!     .kind(NodeKind::Document)
//!     .child_count(2)
//!     .child(0, |header| {
//!         header.header_level(HeaderLevel::H3).text("Title");
//!     })
//!     .child(1, |para| {
//!         para.kind(NodeKind::Paragraph).text_contains("See").has_link("FrontPage");
//!     });
//! ```
//!
//! Failures name the path to the node (e.g. `document[1][0]`) so a broken
//! assertion deep in a tree is easy to find.

use crate::wiki::ast::{HeaderLevel, Node, NodeKind};

/// Start asserting on `node`.
pub fn assert_tree(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.kind().name().to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: Expected a {} node, found {:?}",
            self.context,
            expected,
            self.node
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    /// Assert on the `index`-th child.
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the kinds of all children, in order.
    pub fn child_kinds(self, expected: &[NodeKind]) -> Self {
        let actual: Vec<NodeKind> = self.node.children().iter().map(Node::kind).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected child kinds",
            self.context
        );
        self
    }

    /// Assert the plain text under this node.
    pub fn text(self, expected: &str) -> Self {
        let actual = self.node.plain_text();
        assert_eq!(
            actual, expected,
            "{}: Expected text {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        let actual = self.node.plain_text();
        assert!(
            actual.contains(substring),
            "{}: Expected text to contain {:?}, found {:?}",
            self.context,
            substring,
            actual
        );
        self
    }

    pub fn header_level(self, expected: HeaderLevel) -> Self {
        match self.node {
            Node::Header { level, .. } => assert_eq!(
                *level, expected,
                "{}: Expected header level {:?}, found {:?}",
                self.context, expected, level
            ),
            other => panic!("{}: Expected a header, found {:?}", self.context, other),
        }
        self
    }

    /// Assert that a link to `target` appears anywhere under this node.
    pub fn has_link(self, target: &str) -> Self {
        assert!(
            contains_link(self.node, target),
            "{}: No link to {:?} in {:?}",
            self.context,
            target,
            self.node
        );
        self
    }

    pub fn has_no_links(self) -> Self {
        assert!(
            !any_link(self.node),
            "{}: Expected no links in {:?}",
            self.context,
            self.node
        );
        self
    }
}

fn contains_link(node: &Node, target: &str) -> bool {
    match node {
        Node::Link(found) => found == target,
        _ => node.children().iter().any(|child| contains_link(child, target)),
    }
}

fn any_link(node: &Node) -> bool {
    matches!(node, Node::Link(_)) || node.children().iter().any(any_link)
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(|child| child.kind().name())
        .collect::<Vec<_>>()
        .join(", ")
}
