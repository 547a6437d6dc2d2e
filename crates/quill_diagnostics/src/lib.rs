//! quill_diagnostics: error types surfaced by the tokenizer and parser.
//!
//! Both components fail fast: the first error anywhere in the scan or the
//! recursive descent aborts the whole parse and travels up the call chain as
//! a `Result`. There is no recovery, no partial AST, and no multi-error
//! batching, so an error value is the complete diagnostic for a parse call.

use quill_ast::TokenKind;
use thiserror::Error;

/// The tokenizer's cursor sits on text that matches no rule in the table.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("unexpected character {character:?} at offset {offset}")]
pub struct LexError {
    /// The first unmatched character.
    pub character: char,
    /// Byte offset of that character in the source text.
    pub offset: usize,
}

/// A grammar violation detected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParseError {
    /// Input ran out where a token of the given kind was required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: TokenKind },

    /// The lookahead token's kind does not match the required kind.
    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: TokenKind,
    },

    /// The left operand of an assignment is neither an identifier nor a
    /// member expression.
    #[error("invalid left-hand side in assignment expression")]
    InvalidAssignmentTarget,

    /// A token in literal position is none of the recognized literal kinds.
    #[error("unexpected token {found} where a literal was expected")]
    UnrecognizedLiteral { found: TokenKind },

    /// Nesting in the source exceeds the parser's recursion limit.
    #[error("input is nested too deeply")]
    RecursionLimitExceeded,
}

/// Caller-facing error for a parse call: either the tokenizer or the parser
/// rejected the source.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
