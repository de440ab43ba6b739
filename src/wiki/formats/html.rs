//! HTML output

use super::registry::{FormatError, Formatter};
use crate::wiki::ast::Node;
use crate::wiki::render::to_html;

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        Ok(to_html(doc))
    }

    fn description(&self) -> &str {
        "HTML page body"
    }
}
