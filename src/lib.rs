//! # miniwiki
//!
//! Wiki markup to HTML, built on a small PEG combinator engine.
//!
//! Layout
//!
//! src/wiki
//!   ├── peg         Generic combinator engine (cursor, primitives, combinators)
//!   ├── grammar     The wiki markup rules, written with the engine
//!   ├── ast         Document tree the rules produce
//!   ├── render      HTML emission through a caller-supplied sink
//!   ├── formats     Other serializations of the tree (tag, treeviz, json, yaml)
//!   ├── processor   Entry points: parse_document, markup_to_html, Processor
//!   ├── config      Layered configuration
//!   └── testing     Fluent tree assertions for tests
//!
//! The markup:
//!
//! ```text
//! !!!! Big header          (!!! medium, !! small)
//! *bold* and /italics/, nested one level either way
//! CamelCaseWords become links
//! blank lines separate paragraphs
//! ```
//!
//! Parsing has no memoization and can backtrack heavily on lines with many
//! unmatched delimiters; see [`wiki::processor::Processor`] for size limits.

pub mod wiki;

pub use wiki::ast::{HeaderLevel, Node, NodeKind};
pub use wiki::processor::{markup_to_html, parse_document, render, ParseFailure};
