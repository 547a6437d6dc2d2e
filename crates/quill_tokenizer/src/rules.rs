//! The ordered token rule table.
//!
//! Rules are tried strictly in declaration order against the unconsumed
//! suffix of the source, and the first pattern that matches a non-empty
//! prefix wins. This is first-match, not maximal munch, so the ordering
//! below is load-bearing: keywords sit before the IDENTIFIER rule, NUMBER
//! sits before IDENTIFIER (whose class also matches digits), and every
//! two-character operator sits before its one-character prefix. Reordering
//! the table changes which programs are accepted.
//!
//! The NUMBER and IDENTIFIER classes are spelled out as ASCII ranges
//! rather than `\d`/`\w`: the Rust regex crate makes those classes
//! Unicode-aware, which would admit digits like `١٢٣` that the language
//! does not define. Anything outside the table is a lex error.

use quill_ast::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// One entry of the table: a `^`-anchored pattern and the kind it produces.
/// A `None` kind marks trivia (whitespace, comments) that is consumed
/// without emitting a token.
pub(crate) struct TokenRule {
    pub(crate) pattern: Regex,
    pub(crate) kind: Option<TokenKind>,
}

const RULE_TABLE: &[(&str, Option<TokenKind>)] = &[
    // Trivia.
    (r"^\s+", None),
    (r"^//.*", None),
    (r"(?s)^/\*.*?\*/", None),
    // Punctuation.
    (r"^;", Some(TokenKind::Semicolon)),
    (r"^\{", Some(TokenKind::OpenBrace)),
    (r"^\}", Some(TokenKind::CloseBrace)),
    (r"^\(", Some(TokenKind::OpenParen)),
    (r"^\)", Some(TokenKind::CloseParen)),
    (r"^\[", Some(TokenKind::OpenBracket)),
    (r"^\]", Some(TokenKind::CloseBracket)),
    (r"^,", Some(TokenKind::Comma)),
    (r"^\.", Some(TokenKind::Dot)),
    // Keywords. Word boundaries keep `letter` from matching `let`.
    (r"^\blet\b", Some(TokenKind::LetKeyword)),
    (r"^\bif\b", Some(TokenKind::IfKeyword)),
    (r"^\belse\b", Some(TokenKind::ElseKeyword)),
    (r"^\btrue\b", Some(TokenKind::TrueKeyword)),
    (r"^\bfalse\b", Some(TokenKind::FalseKeyword)),
    (r"^\bnull\b", Some(TokenKind::NullKeyword)),
    (r"^\bwhile\b", Some(TokenKind::WhileKeyword)),
    (r"^\bdo\b", Some(TokenKind::DoKeyword)),
    (r"^\bfor\b", Some(TokenKind::ForKeyword)),
    (r"^\bdef\b", Some(TokenKind::DefKeyword)),
    (r"^\breturn\b", Some(TokenKind::ReturnKeyword)),
    (r"^\bclass\b", Some(TokenKind::ClassKeyword)),
    (r"^\bextends\b", Some(TokenKind::ExtendsKeyword)),
    (r"^\bsuper\b", Some(TokenKind::SuperKeyword)),
    (r"^\bthis\b", Some(TokenKind::ThisKeyword)),
    (r"^\bnew\b", Some(TokenKind::NewKeyword)),
    // Literals and names.
    (r"^[0-9]+", Some(TokenKind::Number)),
    (r#"^"[^"]*""#, Some(TokenKind::String)),
    (r"^'[^']*'", Some(TokenKind::String)),
    (r"^[0-9A-Za-z_]+", Some(TokenKind::Identifier)),
    // Operators. `==`/`!=` before `=` and `!`; compound assignment before
    // the plain arithmetic operators.
    (r"^[=!]=", Some(TokenKind::EqualityOperator)),
    (r"^[*/+\-]=", Some(TokenKind::ComplexAssignment)),
    (r"^=", Some(TokenKind::SimpleAssignment)),
    (r"^&&", Some(TokenKind::LogicalAnd)),
    (r"^\|\|", Some(TokenKind::LogicalOr)),
    (r"^!", Some(TokenKind::LogicalNot)),
    (r"^[<>]=?", Some(TokenKind::RelationalOperator)),
    (r"^[+\-]", Some(TokenKind::AdditiveOperator)),
    (r"^[*/]", Some(TokenKind::MultiplicativeOperator)),
];

/// The compiled rule table, built once on first use.
pub(crate) fn rules() -> &'static [TokenRule] {
    static RULES: OnceLock<Vec<TokenRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RULE_TABLE
            .iter()
            .map(|&(pattern, kind)| TokenRule {
                pattern: Regex::new(pattern).expect("token rule pattern must compile"),
                kind,
            })
            .collect()
    })
}
