//! Wiki markup grammar
//!
//! ```text
//! Document      <- Block* END
//! Block         <- (Header / Paragraph) (Spacing EOL)*
//! Header        <- HeaderIntro InlineContent+ EOL
//! HeaderIntro   <- ("!!!!" / "!!!" / "!!") Spacing
//! Paragraph     <- InlineContent* EOL
//! InlineContent <- Bold / Italics / Link / Text
//! Bold          <- "*" BoldContent+ BoldEnd
//! BoldContent   <- !BoldEnd (Link / ItalicsWithoutBold / Text)
//! Italics       <- "/" ItalicsContent+ ItalicsEnd
//! ItalicsContent <- !ItalicsEnd (Link / BoldWithoutItalics / Text)
//! ItalicsWithoutBold <- "/" (!(ItalicsEnd / &BoldEnd) (Link / Text))+ (ItalicsEnd / &BoldEnd)
//! BoldWithoutItalics <- "*" (!(ItalicsEnd / &BoldEnd) (Link / Text))+ (BoldEnd / &ItalicsEnd)
//! Link          <- CapWord CapWord+
//! Text          <- (!(EOL / "*" / "/" / Link) .)+
//! CapWord       <- [A-Z] [a-z]+
//! BoldEnd       <- "*" / &EOL
//! ItalicsEnd    <- "/" / &EOL
//! Spacing       <- (" " / "\t")*
//! EOL           <- "\r\n" / "\n" / END
//! ```
//!
//! Each rule is a named function so rules can refer to each other (and to
//! themselves) regardless of definition order. Rules that produce a node
//! attach it with `on_match`; rules that only recognize syntax leave the node
//! empty.
//!
//! Bold and italics nest one level inside each other through the
//! `*WithoutX` rules. Those stop early at the enclosing span's end, so an
//! unclosed span always ends at the end of the line, inner span first.

pub mod block;
pub mod inline;
pub mod lexical;

use crate::wiki::ast::Node;
use crate::wiki::peg;

pub use block::{block, document, header, paragraph};
pub use inline::{
    bold, bold_content, bold_without_italics, bold_without_italics_content, inline_content,
    italics, italics_content, italics_without_bold, italics_without_bold_content, link, text,
};
pub use lexical::{
    bold_delim, bold_end, cap_word, eol, h1, h2, h3, header_intro, initial_cap, italics_delim,
    italics_end, lowercase, spacing, whitespace,
};

/// Result of applying a grammar rule.
pub type Outcome<'a> = peg::Outcome<'a, Node>;

/// Move the node of part `index` up to the whole match.
fn lift_part(m: &mut peg::Match<'_, Node>, index: usize) {
    m.node = m.take_part_node(index);
}

/// Nodes produced by the repetition at part `index`.
fn repeated_nodes(m: &mut peg::Match<'_, Node>, index: usize) -> Vec<Node> {
    m.parts
        .get_mut(index)
        .map(|repetition| repetition.take_part_nodes())
        .unwrap_or_default()
}
