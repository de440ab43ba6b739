//! Input position and match results

/// A read-only position in the text being parsed.
///
/// Cursors are `Copy` and never change: parsers receive one and describe how
/// far they got through [`Match::consumed`]. Offsets are byte offsets and
/// always fall on a `char` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, index: 0 }
    }

    /// Cursor at `index` in `text`.
    ///
    /// Panics if `index` is past the end of `text` or not on a char boundary.
    pub fn at(text: &'a str, index: usize) -> Self {
        assert!(
            text.is_char_boundary(index),
            "cursor index {index} is not a char boundary of a {} byte text",
            text.len()
        );
        Self { text, index }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The unparsed part of the text.
    pub fn rest(&self) -> &'a str {
        &self.text[self.index..]
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.text.len()
    }

    /// A cursor `consumed` bytes further along.
    pub fn advance(&self, consumed: usize) -> Self {
        Self::at(self.text, self.index + consumed)
    }

    /// The `len` bytes starting at this cursor.
    pub fn slice(&self, len: usize) -> &'a str {
        &self.text[self.index..self.index + len]
    }

    /// 1-based line and column (in chars) of this cursor.
    pub fn line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.index];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

/// A successful application of a parser.
///
/// For every consuming parser `text` is exactly the `consumed` bytes starting
/// at the cursor the parser was given. The positive lookahead [`and`] is the
/// one exception: it reports the inner parser's text but consumes nothing.
///
/// [`and`]: super::and
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, N> {
    pub text: &'a str,
    pub consumed: usize,
    /// Node attached by the grammar, if any.
    pub node: Option<N>,
    /// Sub-results of sequences and repetitions, in input order.
    pub parts: Vec<Match<'a, N>>,
}

impl<'a, N> Match<'a, N> {
    /// A match with no node and no parts.
    pub fn leaf(text: &'a str, consumed: usize) -> Self {
        Self {
            text,
            consumed,
            node: None,
            parts: Vec::new(),
        }
    }

    /// A zero-width match.
    pub fn empty() -> Self {
        Self::leaf("", 0)
    }

    /// Take the node of the `index`-th part, leaving `None` behind.
    pub fn take_part_node(&mut self, index: usize) -> Option<N> {
        self.parts.get_mut(index).and_then(|part| part.node.take())
    }

    /// Take the nodes of all parts in order, skipping parts without a node.
    pub fn take_part_nodes(&mut self) -> Vec<N> {
        self.parts
            .iter_mut()
            .filter_map(|part| part.node.take())
            .collect()
    }
}

/// Result of applying a parser: `None` is a failed match.
pub type Outcome<'a, N> = Option<Match<'a, N>>;
