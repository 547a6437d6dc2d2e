//! quill_ast: Abstract Syntax Tree definitions for the Quill language.
//!
//! This crate defines the TokenKind enum shared by the tokenizer and parser,
//! and the closed set of AST node types the parser produces.

pub mod node;
pub mod token_kind;

// Re-export key types
pub use node::*;
pub use token_kind::TokenKind;
