//! Entry points for turning page markup into a tree or into HTML
//!
//! The page repository and web layer live outside this crate. They hand over a
//! page's current markup (and its name, when they want it echoed back) and get
//! either a [`ParseFailure`] or HTML.

use std::fmt;

use tracing::{debug, warn};

use crate::wiki::ast::Node;
use crate::wiki::config::ParserConfig;
use crate::wiki::grammar::{block, document};
use crate::wiki::peg::{zero_or_more, Cursor, Parser};
use crate::wiki::render;

/// Errors returned when markup cannot be turned into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The grammar stopped matching blocks before the end of the text.
    NoMatch {
        /// Byte offset where the first unparseable block starts.
        offset: usize,
        line: usize,
        column: usize,
    },
    /// The input was rejected before parsing.
    InputTooLarge { size: usize, limit: usize },
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::NoMatch { line, column, .. } => {
                write!(f, "Markup could not be parsed at line {line}, column {column}")
            }
            ParseFailure::InputTooLarge { size, limit } => {
                write!(f, "Markup is {size} bytes, over the limit of {limit} bytes")
            }
        }
    }
}

impl std::error::Error for ParseFailure {}

/// Parse page markup into a [`Node::Document`].
///
/// A line end is appended first, so markup does not need to end with one.
pub fn parse_document(markup: &str) -> Result<Node, ParseFailure> {
    let source = format!("{markup}\n");
    let start = Cursor::new(&source);
    debug!(bytes = markup.len(), "parsing document");

    let parsed = document(start).and_then(|m| m.node);
    match parsed {
        Some(node) => {
            debug!(blocks = node.children().len(), "parsed document");
            Ok(node)
        }
        None => {
            let offset = zero_or_more(block)
                .parse(start)
                .map(|m| m.consumed)
                .unwrap_or(0);
            let (line, column) = start.advance(offset).line_col();
            warn!(offset, line, column, "markup did not parse");
            Err(ParseFailure::NoMatch {
                offset,
                line,
                column,
            })
        }
    }
}

/// Stream the HTML for `node` into `sink`.
pub fn render<F: FnMut(&str)>(node: &Node, sink: F) {
    render::render(node, sink)
}

/// Parse `markup` and render it to an HTML string.
pub fn markup_to_html(markup: &str) -> Result<String, ParseFailure> {
    parse_document(markup).map(|doc| render::to_html(&doc))
}

/// A wiki page as handed over by the page store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub markup: String,
}

impl Page {
    pub fn new(name: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markup: markup.into(),
        }
    }
}

/// The HTML body for a page, ready for the response buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub name: String,
    pub html: String,
}

/// Parses and renders markup under the configured limits.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: ParserConfig,
}

impl Processor {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Like [`parse_document`], but rejects input over `max_input_bytes`.
    pub fn parse(&self, markup: &str) -> Result<Node, ParseFailure> {
        self.check_size(markup)?;
        parse_document(markup)
    }

    pub fn to_html(&self, markup: &str) -> Result<String, ParseFailure> {
        self.parse(markup).map(|doc| render::to_html(&doc))
    }

    pub fn render_page(&self, page: &Page) -> Result<RenderedPage, ParseFailure> {
        debug!(page = %page.name, "rendering page");
        let html = self.to_html(&page.markup)?;
        Ok(RenderedPage {
            name: page.name.clone(),
            html,
        })
    }

    fn check_size(&self, markup: &str) -> Result<(), ParseFailure> {
        let limit = self.config.max_input_bytes;
        if limit > 0 && markup.len() > limit {
            warn!(size = markup.len(), limit, "markup over size limit");
            return Err(ParseFailure::InputTooLarge {
                size: markup.len(),
                limit,
            });
        }
        Ok(())
    }
}
