//! Output formats for parsed documents
//!
//! - `html`: the page body as served to readers
//! - `tag`: XML-like dump of the tree, one element per line
//! - `treeviz`: one line per node with an icon, for a quick look at structure
//! - `json` / `yaml`: serde serialization of the tree

pub mod html;
pub mod registry;
pub mod serialized;
pub mod tag;
pub mod treeviz;

pub use html::HtmlFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_document as serialize_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
