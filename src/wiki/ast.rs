//! Document tree produced by the wiki grammar
//!
//! A parsed page is a single [`Node::Document`] whose children are blocks
//! (headers and paragraphs), whose children in turn are inline nodes. Nodes
//! own their children; there are no back references, and a node renders from
//! its own data alone.

pub mod node;
pub mod traits;

pub use node::{HeaderLevel, Node, NodeKind};
pub use traits::{visit_children, visit_node, Visitor};
