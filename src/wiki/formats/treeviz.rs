//! Treeviz formatter for document trees
//!
//! One line per node, with box-drawing connectors showing nesting:
//!
//! ```text
//! ⧉ WelcomeSee FrontPage
//! ├─ § h1 Welcome
//! │ └─ ◦ Welcome
//! └─ ¶ See FrontPage
//!   ├─ ◦ See
//!   └─ ⊕ FrontPage
//! ```
//!
//! Labels are the node's trimmed plain text, truncated to 30 characters.
//!
//! Icons
//!     Document: ⧉
//!     Header: §
//!     Paragraph: ¶
//!     Text: ◦
//!     Link: ⊕
//!     Bold: 𝐁
//!     Italics: 𝐼

use super::registry::{FormatError, Formatter};
use crate::wiki::ast::{Node, NodeKind};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "⧉",
        NodeKind::Header => "§",
        NodeKind::Paragraph => "¶",
        NodeKind::Text => "◦",
        NodeKind::Link => "⊕",
        NodeKind::Bold => "𝐁",
        NodeKind::Italics => "𝐼",
    }
}

fn label(node: &Node) -> String {
    let text = node.plain_text();
    let text = text.trim();
    match node {
        Node::Header { level, .. } => truncate(&format!("{} {}", level.tag(), text), 30),
        _ => truncate(text, 30),
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.kind()),
        label(node)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(node.children(), &child_prefix, output);
}

fn format_children(children: &[Node], prefix: &str, output: &mut String) {
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i + 1 == count, output);
    }
}

pub fn to_treeviz_str(doc: &Node) -> String {
    let mut output = format!("{} {}\n", get_icon(doc.kind()), label(doc));
    format_children(doc.children(), "", &mut output);
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}
