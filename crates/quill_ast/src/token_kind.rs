//! TokenKind enum - every lexical token kind the tokenizer can produce.

use std::fmt;

/// The kind of a lexical token.
///
/// Operator kinds are grouped by grammar role rather than by lexeme: `+` and
/// `-` are both `AdditiveOperator`, `==` and `!=` are both
/// `EqualityOperator`, and so on. The parser branches on the kind and reads
/// the concrete operator from the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation
    Semicolon,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    Dot,

    // Keywords
    LetKeyword,
    IfKeyword,
    ElseKeyword,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    WhileKeyword,
    DoKeyword,
    ForKeyword,
    DefKeyword,
    ReturnKeyword,
    ClassKeyword,
    ExtendsKeyword,
    SuperKeyword,
    ThisKeyword,
    NewKeyword,

    // Literals and names
    Number,
    String,
    Identifier,

    // Operators
    EqualityOperator,
    SimpleAssignment,
    ComplexAssignment,
    AdditiveOperator,
    MultiplicativeOperator,
    RelationalOperator,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
}

impl TokenKind {
    /// The fixed source text of this kind, for kinds with a single lexeme.
    /// Kinds that match a family of lexemes (literals, identifiers, grouped
    /// operators) return None.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            TokenKind::Semicolon => Some(";"),
            TokenKind::OpenBrace => Some("{"),
            TokenKind::CloseBrace => Some("}"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::OpenBracket => Some("["),
            TokenKind::CloseBracket => Some("]"),
            TokenKind::Comma => Some(","),
            TokenKind::Dot => Some("."),
            TokenKind::LetKeyword => Some("let"),
            TokenKind::IfKeyword => Some("if"),
            TokenKind::ElseKeyword => Some("else"),
            TokenKind::TrueKeyword => Some("true"),
            TokenKind::FalseKeyword => Some("false"),
            TokenKind::NullKeyword => Some("null"),
            TokenKind::WhileKeyword => Some("while"),
            TokenKind::DoKeyword => Some("do"),
            TokenKind::ForKeyword => Some("for"),
            TokenKind::DefKeyword => Some("def"),
            TokenKind::ReturnKeyword => Some("return"),
            TokenKind::ClassKeyword => Some("class"),
            TokenKind::ExtendsKeyword => Some("extends"),
            TokenKind::SuperKeyword => Some("super"),
            TokenKind::ThisKeyword => Some("this"),
            TokenKind::NewKeyword => Some("new"),
            TokenKind::SimpleAssignment => Some("="),
            TokenKind::LogicalAnd => Some("&&"),
            TokenKind::LogicalOr => Some("||"),
            TokenKind::LogicalNot => Some("!"),
            _ => None,
        }
    }

    /// The grammar name of this kind, used in diagnostics for kinds without
    /// a fixed lexeme.
    pub fn grammar_name(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::ComplexAssignment => "COMPLEX_ASSIGNMENT",
            TokenKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            TokenKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::SimpleAssignment => "SIMPLE_ASSIGNMENT",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
            TokenKind::Semicolon => "';'",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::LetKeyword => "'let'",
            TokenKind::IfKeyword => "'if'",
            TokenKind::ElseKeyword => "'else'",
            TokenKind::TrueKeyword => "'true'",
            TokenKind::FalseKeyword => "'false'",
            TokenKind::NullKeyword => "'null'",
            TokenKind::WhileKeyword => "'while'",
            TokenKind::DoKeyword => "'do'",
            TokenKind::ForKeyword => "'for'",
            TokenKind::DefKeyword => "'def'",
            TokenKind::ReturnKeyword => "'return'",
            TokenKind::ClassKeyword => "'class'",
            TokenKind::ExtendsKeyword => "'extends'",
            TokenKind::SuperKeyword => "'super'",
            TokenKind::ThisKeyword => "'this'",
            TokenKind::NewKeyword => "'new'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.grammar_name())
    }
}
