//! XML-like tag serialization of the document tree
//!
//! - Node kind → tag name
//! - Leaf text → element content (escaped)
//! - Children → nested tags, indented two spaces per level
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <header level="1">
//!     <text>Welcome</text>
//!   </header>
//!   <paragraph>
//!     <text>See </text>
//!     <link>FrontPage</link>
//!   </paragraph>
//! </document>
//! ```

use super::registry::{FormatError, Formatter};
use crate::wiki::ast::{visit_children, visit_node, HeaderLevel, Node, Visitor};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
    }

    fn tag_with_text(&mut self, tag: &str, text: &str) {
        self.push_indent(&format!("<{tag}>{}</{tag}>\n", escape_xml(text)));
    }

    fn container(&mut self, open: &str, tag: &str, children: &[Node]) {
        if children.is_empty() {
            self.push_indent(&format!("<{open}></{tag}>\n"));
            return;
        }
        self.push_indent(&format!("<{open}>\n"));
        self.indent_level += 1;
        visit_children(self, children);
        self.indent_level -= 1;
        self.push_indent(&format!("</{tag}>\n"));
    }
}

impl Visitor for TagSerializer {
    fn visit_text(&mut self, text: &str) {
        self.tag_with_text("text", text);
    }

    fn visit_link(&mut self, target: &str) {
        self.tag_with_text("link", target);
    }

    fn visit_bold(&mut self, children: &[Node]) {
        self.container("bold", "bold", children);
    }

    fn visit_italics(&mut self, children: &[Node]) {
        self.container("italics", "italics", children);
    }

    fn visit_header(&mut self, level: HeaderLevel, children: &[Node]) {
        let open = format!("header level=\"{}\"", level.number());
        self.container(&open, "header", children);
    }

    fn visit_paragraph(&mut self, children: &[Node]) {
        self.container("paragraph", "paragraph", children);
    }

    fn visit_document(&mut self, children: &[Node]) {
        self.container("document", "document", children);
    }
}

/// Serialize a tree to tag format
pub fn serialize_document(doc: &Node) -> String {
    let mut serializer = TagSerializer {
        output: String::new(),
        indent_level: 0,
    };
    visit_node(&mut serializer, doc);
    serializer.output
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "XML-like tree of document nodes"
    }
}
