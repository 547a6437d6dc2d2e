//! AST node definitions for the Quill language.
//!
//! Every node is part of a closed variant family: `Program` at the root,
//! `Statement` and `Expression` beneath it. Nodes are immutable once built
//! and reference their children through arena-allocated references, so a
//! parse result is a plain tree owned by the caller alongside the arena.
//!
//! All nodes serialize with a `type` discriminant (via the struct-level
//! serde tag), which is what makes the tree dump language-agnostic.

use serde::Serialize;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Program
// ============================================================================

/// The root node of a parsed source unit.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct Program<'a> {
    pub body: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Statement<'a> {
    ExpressionStatement(ExpressionStatement<'a>),
    BlockStatement(BlockStatement<'a>),
    EmptyStatement(EmptyStatement),
    VariableStatement(VariableStatement<'a>),
    IfStatement(IfStatement<'a>),
    WhileStatement(WhileStatement<'a>),
    DoWhileStatement(DoWhileStatement<'a>),
    ForStatement(ForStatement<'a>),
    FunctionDeclaration(FunctionDeclaration<'a>),
    ReturnStatement(ReturnStatement<'a>),
    ClassDeclaration(ClassDeclaration<'a>),
}

/// An expression in statement position, terminated by `;`.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement<'a> {
    pub expression: &'a Expression<'a>,
}

/// A `{ ... }` statement list.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement<'a> {
    pub body: NodeList<'a, Statement<'a>>,
}

/// A lone `;`.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct EmptyStatement {}

/// `let` with one or more comma-separated declarations.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct VariableStatement<'a> {
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

/// A single `name` or `name = init` entry of a variable statement.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration<'a> {
    pub id: Identifier<'a>,
    pub init: Option<&'a Expression<'a>>,
}

/// `if (test) consequent` with an optional `else alternate`.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct IfStatement<'a> {
    pub test: &'a Expression<'a>,
    pub consequent: &'a Statement<'a>,
    pub alternate: Option<&'a Statement<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct WhileStatement<'a> {
    pub test: &'a Expression<'a>,
    pub body: &'a Statement<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct DoWhileStatement<'a> {
    pub body: &'a Statement<'a>,
    pub test: &'a Expression<'a>,
}

/// C-style `for`. Each clause is independently optional.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ForStatement<'a> {
    pub init: Option<ForInit<'a>>,
    pub test: Option<&'a Expression<'a>>,
    pub update: Option<&'a Expression<'a>>,
    pub body: &'a Statement<'a>,
}

/// The init clause of a `for` statement: either a `let` declaration list
/// (whose terminating `;` belongs to the `for` syntax) or a bare expression.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ForInit<'a> {
    VariableStatement(VariableStatement<'a>),
    Expression(&'a Expression<'a>),
}

/// `def name(params) { ... }`.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct FunctionDeclaration<'a> {
    pub name: Identifier<'a>,
    pub params: NodeList<'a, Identifier<'a>>,
    pub body: BlockStatement<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement<'a> {
    pub argument: Option<&'a Expression<'a>>,
}

/// `class Name (extends Super)? { ... }`. The body is an ordinary block:
/// the grammar does not single out method declarations, so any statement is
/// syntactically legal inside it.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ClassDeclaration<'a> {
    pub id: Identifier<'a>,
    #[serde(rename = "superClass")]
    pub super_class: Option<Identifier<'a>>,
    pub body: BlockStatement<'a>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Expression<'a> {
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral<'a>),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    Identifier(Identifier<'a>),
    BinaryExpression(BinaryExpression<'a>),
    LogicalExpression(LogicalExpression<'a>),
    UnaryExpression(UnaryExpression<'a>),
    AssignmentExpression(AssignmentExpression<'a>),
    MemberExpression(MemberExpression<'a>),
    CallExpression(CallExpression<'a>),
    NewExpression(NewExpression<'a>),
    ThisExpression(ThisExpression),
    SuperExpression(SuperExpression),
}

impl Expression<'_> {
    /// Whether this expression is a syntactically legal assignment target.
    /// Only identifiers and member accesses qualify.
    pub fn is_assignment_target(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_) | Expression::MemberExpression(_)
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct NumericLiteral {
    pub value: f64,
}

/// The literal's value is the raw source text between the quotes; escape
/// sequences are not decoded.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral<'a> {
    pub value: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct NullLiteral {}

/// A name, borrowing its text from the source.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct Identifier<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression<'a> {
    pub operator: &'a str,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

/// `&&` / `||`. Kept apart from BinaryExpression so consumers can treat
/// short-circuiting operators distinctly.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct LogicalExpression<'a> {
    pub operator: &'a str,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

/// Prefix `+` / `-` / `!`.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression<'a> {
    pub operator: &'a str,
    pub argument: &'a Expression<'a>,
}

/// `left op= right`. The parser guarantees `left` is an assignment target.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct AssignmentExpression<'a> {
    pub operator: &'a str,
    pub left: &'a Expression<'a>,
    pub right: &'a Expression<'a>,
}

/// `object.property` (computed = false, property is an Identifier) or
/// `object[property]` (computed = true, property is any expression).
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression<'a> {
    pub computed: bool,
    pub object: &'a Expression<'a>,
    pub property: &'a Expression<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression<'a> {
    pub callee: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

/// `new Callee(args)` where the callee is a member expression.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression<'a> {
    pub callee: &'a Expression<'a>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct SuperExpression {}
