//! quill_tokenizer: lexer for Quill source code.
//!
//! Lazily produces tokens from source text on demand. Matching is driven by
//! a static, ordered rule table with first-match semantics: the first rule
//! whose pattern matches a prefix of the unconsumed input wins, so the order
//! of the table is part of the language definition.

mod rules;
mod token;
mod tokenizer;

pub use token::Token;
pub use tokenizer::Tokenizer;
