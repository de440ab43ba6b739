//! Document node variants

use serde::Serialize;
use std::fmt;

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Node {
    /// Literal text, rendered verbatim.
    Text(String),
    /// A CamelCase page link; the text is both label and target.
    Link(String),
    /// Span delimited by `*`.
    Bold(Vec<Node>),
    /// Span delimited by `/`.
    Italics(Vec<Node>),
    /// Line introduced by a run of `!`.
    Header {
        level: HeaderLevel,
        children: Vec<Node>,
    },
    Paragraph(Vec<Node>),
    /// Root of a parsed page; children are headers and paragraphs.
    Document(Vec<Node>),
}

impl Node {
    /// Child nodes; empty for text and links.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) | Node::Link(_) => &[],
            Node::Bold(children)
            | Node::Italics(children)
            | Node::Header { children, .. }
            | Node::Paragraph(children)
            | Node::Document(children) => children,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Text(_) => NodeKind::Text,
            Node::Link(_) => NodeKind::Link,
            Node::Bold(_) => NodeKind::Bold,
            Node::Italics(_) => NodeKind::Italics,
            Node::Header { .. } => NodeKind::Header,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Document(_) => NodeKind::Document,
        }
    }

    /// Text of a leaf node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) | Node::Link(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` for headers and paragraphs.
    pub fn is_block(&self) -> bool {
        matches!(self, Node::Header { .. } | Node::Paragraph(_))
    }

    /// All text under this node in document order, without any markup.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self.as_text() {
            Some(text) => out.push_str(text),
            None => self
                .children()
                .iter()
                .for_each(|child| child.collect_text(out)),
        }
    }
}

/// Discriminant of [`Node`], for matching and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Link,
    Bold,
    Italics,
    Header,
    Paragraph,
    Document,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Text => "text",
            NodeKind::Link => "link",
            NodeKind::Bold => "bold",
            NodeKind::Italics => "italics",
            NodeKind::Header => "header",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Document => "document",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header size. More `!` means a bigger header: `!!!!` is level 1, `!!` level 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum HeaderLevel {
    H1,
    H2,
    H3,
}

impl HeaderLevel {
    /// Level for a header marker, ignoring trailing spacing.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.trim_end_matches([' ', '\t']) {
            "!!!!" => Some(HeaderLevel::H1),
            "!!!" => Some(HeaderLevel::H2),
            "!!" => Some(HeaderLevel::H3),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            HeaderLevel::H1 => 1,
            HeaderLevel::H2 => 2,
            HeaderLevel::H3 => 3,
        }
    }

    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            HeaderLevel::H1 => "h1",
            HeaderLevel::H2 => "h2",
            HeaderLevel::H3 => "h3",
        }
    }
}

impl From<HeaderLevel> for u8 {
    fn from(level: HeaderLevel) -> Self {
        level.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Paragraph(vec![
            Node::Text("see ".into()),
            Node::Bold(vec![
                Node::Link("FrontPage".into()),
                Node::Italics(vec![Node::Text(" now".into())]),
            ]),
        ])
    }

    #[test]
    fn plain_text_flattens_in_order() {
        assert_eq!(sample().plain_text(), "see FrontPage now");
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Node::Text("x".into()).children().is_empty());
        assert!(Node::Link("WikiWord".into()).children().is_empty());
        assert_eq!(sample().children().len(), 2);
    }

    #[test]
    fn blocks_are_headers_and_paragraphs() {
        assert!(sample().is_block());
        assert!(Node::Header {
            level: HeaderLevel::H2,
            children: vec![]
        }
        .is_block());
        assert!(!Node::Bold(vec![]).is_block());
        assert!(!Node::Document(vec![]).is_block());
    }

    #[test]
    fn header_level_from_marker() {
        assert_eq!(HeaderLevel::from_marker("!!!! "), Some(HeaderLevel::H1));
        assert_eq!(HeaderLevel::from_marker("!!!\t"), Some(HeaderLevel::H2));
        assert_eq!(HeaderLevel::from_marker("!!"), Some(HeaderLevel::H3));
        assert_eq!(HeaderLevel::from_marker("!"), None);
        assert_eq!(HeaderLevel::H2.tag(), "h2");
    }

    #[test]
    fn kind_names() {
        assert_eq!(sample().kind().to_string(), "paragraph");
        assert_eq!(NodeKind::Italics.name(), "italics");
    }
}
