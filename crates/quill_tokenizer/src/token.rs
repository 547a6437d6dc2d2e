//! Token information produced by the tokenizer.

use quill_ast::TokenKind;

/// A single lexical token.
///
/// The text borrows the exact matched span of the source, so concatenating
/// the spans of all consumed tokens and trivia reconstructs the input.
/// STRING tokens keep their surrounding quotes; the parser strips them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The matched source text.
    pub text: &'a str,
}
