//! The Quill tokenizer.

use crate::rules::rules;
use crate::token::Token;
use quill_diagnostics::LexError;

/// Converts source text into tokens, one `next_token` call at a time.
///
/// The tokenizer holds only the source and a cursor; it carries no state
/// between parses. Create a fresh tokenizer per source string.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    /// The full source text, read-only for the session.
    source: &'a str,
    /// Byte offset of the next unconsumed character.
    cursor: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether any unconsumed input remains.
    #[inline]
    pub fn has_more_tokens(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Produce the next token, or `Ok(None)` once the input is exhausted.
    ///
    /// The rule table is tried in order against the unconsumed suffix; the
    /// first matching rule wins and the cursor advances past the match.
    /// A trivia match emits nothing and rescans from the new position. If
    /// no rule matches the (non-empty) suffix, the offending character is
    /// reported as a `LexError`.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, LexError> {
        let source = self.source;
        'scan: while self.has_more_tokens() {
            let rest = &source[self.cursor..];
            for rule in rules() {
                let Some(matched) = rule.pattern.find(rest) else {
                    continue;
                };
                self.cursor += matched.end();
                match rule.kind {
                    Some(kind) => {
                        return Ok(Some(Token {
                            kind,
                            text: matched.as_str(),
                        }))
                    }
                    None => continue 'scan,
                }
            }
            return Err(LexError {
                // `rest` is non-empty while has_more_tokens holds.
                character: rest.chars().next().unwrap_or_default(),
                offset: self.cursor,
            });
        }
        Ok(None)
    }
}
