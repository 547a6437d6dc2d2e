//! quill_parser: recursive descent parser for the Quill language.
//!
//! Consumes tokens from the tokenizer with a single token of lookahead and
//! builds an arena-allocated AST. Operator precedence and associativity are
//! encoded directly in the call structure: one method per precedence level,
//! each folding its own operators and deferring to the next-tighter level.

mod parser;

pub use parser::{parse, Parser};
pub use quill_diagnostics::{LexError, ParseError, SyntaxError};
