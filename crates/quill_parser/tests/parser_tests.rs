//! Parser integration tests.
//!
//! Verifies that the parser builds the right tree shapes from Quill source
//! and rejects malformed input with the right error.

use bumpalo::Bump;
use quill_ast::node::*;
use quill_ast::TokenKind;
use quill_parser::{parse, ParseError, SyntaxError};

/// Helper: parse source and return the number of top-level statements.
fn statement_count(source: &str) -> usize {
    let arena = Bump::new();
    let program = parse(&arena, source).expect("source should parse");
    program.body.len()
}

/// Helper: parse source and return the error it produces.
fn parse_err(source: &str) -> SyntaxError {
    let arena = Bump::new();
    parse(&arena, source).expect_err("source should not parse")
}

/// Helper: parse a single expression statement and hand its expression to a
/// closure for structural checks.
fn with_expression(source: &str, check: impl FnOnce(&Expression<'_>)) {
    let arena = Bump::new();
    let program = parse(&arena, source).expect("source should parse");
    assert_eq!(program.body.len(), 1, "source: {source}");
    let Statement::ExpressionStatement(stmt) = &program.body[0] else {
        panic!("expected an expression statement in {source:?}");
    };
    check(stmt.expression);
}

// ============================================================================
// Programs and simple statements
// ============================================================================

#[test]
fn test_empty_program() {
    assert_eq!(statement_count(""), 0);
    assert_eq!(statement_count("   \n  // just a comment\n"), 0);
}

#[test]
fn test_empty_statement() {
    let arena = Bump::new();
    let program = parse(&arena, ";").unwrap();
    assert!(matches!(program.body[0], Statement::EmptyStatement(_)));
}

#[test]
fn test_multiple_statements() {
    assert_eq!(statement_count("1; 2; 3;"), 3);
}

#[test]
fn test_block_statement() {
    let arena = Bump::new();
    let program = parse(&arena, "{ 1; 2; } {}").unwrap();
    assert_eq!(program.body.len(), 2);
    let Statement::BlockStatement(block) = &program.body[0] else {
        panic!("expected a block");
    };
    assert_eq!(block.body.len(), 2);
    let Statement::BlockStatement(empty) = &program.body[1] else {
        panic!("expected a block");
    };
    assert!(empty.body.is_empty());
}

#[test]
fn test_missing_semicolon() {
    assert!(matches!(
        parse_err("1 + 2"),
        SyntaxError::Parse(ParseError::UnexpectedEnd {
            expected: TokenKind::Semicolon
        })
    ));
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numeric_literal() {
    with_expression("42;", |expr| {
        let Expression::NumericLiteral(n) = expr else {
            panic!("expected a numeric literal");
        };
        assert_eq!(n.value, 42.0);
    });
}

#[test]
fn test_string_literal_strips_quotes() {
    with_expression(r#""hello";"#, |expr| {
        let Expression::StringLiteral(n) = expr else {
            panic!("expected a string literal");
        };
        assert_eq!(n.value, "hello");
    });
    with_expression("'world';", |expr| {
        let Expression::StringLiteral(n) = expr else {
            panic!("expected a string literal");
        };
        assert_eq!(n.value, "world");
    });
}

#[test]
fn test_boolean_and_null_literals() {
    with_expression("true;", |expr| {
        assert!(matches!(expr, Expression::BooleanLiteral(BooleanLiteral { value: true })));
    });
    with_expression("false;", |expr| {
        assert!(matches!(expr, Expression::BooleanLiteral(BooleanLiteral { value: false })));
    });
    with_expression("null;", |expr| {
        assert!(matches!(expr, Expression::NullLiteral(_)));
    });
}

// ============================================================================
// Binary expressions, precedence and associativity
// ============================================================================

#[test]
fn test_simple_addition() {
    with_expression("1 + 2;", |expr| {
        let Expression::BinaryExpression(n) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(n.operator, "+");
        assert!(matches!(n.left, Expression::NumericLiteral(NumericLiteral { value }) if *value == 1.0));
        assert!(matches!(n.right, Expression::NumericLiteral(NumericLiteral { value }) if *value == 2.0));
    });
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    // 2 + 3 * 4 groups as 2 + (3 * 4).
    with_expression("2 + 3 * 4;", |expr| {
        let Expression::BinaryExpression(add) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(add.operator, "+");
        let Expression::BinaryExpression(mul) = add.right else {
            panic!("expected the multiplication on the right");
        };
        assert_eq!(mul.operator, "*");
    });
}

#[test]
fn test_parentheses_override_precedence() {
    // (2 + 3) * 4 groups as (2 + 3) * 4 with no extra node for the parens.
    with_expression("(2 + 3) * 4;", |expr| {
        let Expression::BinaryExpression(mul) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(mul.operator, "*");
        let Expression::BinaryExpression(add) = mul.left else {
            panic!("expected the addition on the left");
        };
        assert_eq!(add.operator, "+");
    });
}

#[test]
fn test_additive_is_left_associative() {
    // 1 - 2 - 3 groups as (1 - 2) - 3.
    with_expression("1 - 2 - 3;", |expr| {
        let Expression::BinaryExpression(outer) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(outer.operator, "-");
        let Expression::BinaryExpression(inner) = outer.left else {
            panic!("expected the first subtraction on the left");
        };
        assert_eq!(inner.operator, "-");
        assert!(matches!(outer.right, Expression::NumericLiteral(NumericLiteral { value }) if *value == 3.0));
    });
}

#[test]
fn test_relational_and_equality() {
    // x > 1 == true groups as (x > 1) == true.
    with_expression("x > 1 == true;", |expr| {
        let Expression::BinaryExpression(eq) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(eq.operator, "==");
        let Expression::BinaryExpression(rel) = eq.left else {
            panic!("expected the comparison on the left");
        };
        assert_eq!(rel.operator, ">");
    });
}

// ============================================================================
// Logical and unary expressions
// ============================================================================

#[test]
fn test_logical_or_of_ands() {
    // a && b || c groups as (a && b) || c.
    with_expression("a && b || c;", |expr| {
        let Expression::LogicalExpression(or) = expr else {
            panic!("expected a logical expression");
        };
        assert_eq!(or.operator, "||");
        let Expression::LogicalExpression(and) = or.left else {
            panic!("expected the && on the left");
        };
        assert_eq!(and.operator, "&&");
    });
}

#[test]
fn test_unary_expressions() {
    with_expression("-x;", |expr| {
        let Expression::UnaryExpression(n) = expr else {
            panic!("expected a unary expression");
        };
        assert_eq!(n.operator, "-");
    });
    with_expression("!done;", |expr| {
        let Expression::UnaryExpression(n) = expr else {
            panic!("expected a unary expression");
        };
        assert_eq!(n.operator, "!");
    });
    // Unary nests: !!x is !(!x).
    with_expression("!!x;", |expr| {
        let Expression::UnaryExpression(outer) = expr else {
            panic!("expected a unary expression");
        };
        assert!(matches!(outer.argument, Expression::UnaryExpression(_)));
    });
}

#[test]
fn test_unary_binds_tighter_than_multiplication() {
    // -x * y groups as (-x) * y.
    with_expression("-x * y;", |expr| {
        let Expression::BinaryExpression(mul) = expr else {
            panic!("expected a binary expression");
        };
        assert!(matches!(mul.left, Expression::UnaryExpression(_)));
    });
}

// ============================================================================
// Assignment
// ============================================================================

#[test]
fn test_assignment_is_right_associative() {
    // a = b = c groups as a = (b = c).
    with_expression("a = b = c;", |expr| {
        let Expression::AssignmentExpression(outer) = expr else {
            panic!("expected an assignment");
        };
        assert_eq!(outer.operator, "=");
        assert!(matches!(outer.left, Expression::Identifier(Identifier { name: "a" })));
        let Expression::AssignmentExpression(inner) = outer.right else {
            panic!("expected a nested assignment on the right");
        };
        assert!(matches!(inner.left, Expression::Identifier(Identifier { name: "b" })));
    });
}

#[test]
fn test_compound_assignment() {
    with_expression("x += 1;", |expr| {
        let Expression::AssignmentExpression(n) = expr else {
            panic!("expected an assignment");
        };
        assert_eq!(n.operator, "+=");
    });
}

#[test]
fn test_member_expression_is_valid_target() {
    with_expression("a.b = 1;", |expr| {
        let Expression::AssignmentExpression(n) = expr else {
            panic!("expected an assignment");
        };
        assert!(matches!(n.left, Expression::MemberExpression(_)));
    });
}

#[test]
fn test_literal_is_invalid_target() {
    assert_eq!(
        parse_err("1 = 2;"),
        SyntaxError::Parse(ParseError::InvalidAssignmentTarget)
    );
}

#[test]
fn test_call_is_invalid_target() {
    assert_eq!(
        parse_err("f() = 2;"),
        SyntaxError::Parse(ParseError::InvalidAssignmentTarget)
    );
}

// ============================================================================
// Variable statements
// ============================================================================

#[test]
fn test_variable_with_initializer() {
    let arena = Bump::new();
    let program = parse(&arena, "let x = 42;").unwrap();
    let Statement::VariableStatement(stmt) = &program.body[0] else {
        panic!("expected a variable statement");
    };
    assert_eq!(stmt.declarations.len(), 1);
    assert_eq!(stmt.declarations[0].id.name, "x");
    assert!(stmt.declarations[0].init.is_some());
}

#[test]
fn test_variable_without_initializer() {
    let arena = Bump::new();
    let program = parse(&arena, "let x;").unwrap();
    let Statement::VariableStatement(stmt) = &program.body[0] else {
        panic!("expected a variable statement");
    };
    assert!(stmt.declarations[0].init.is_none());
}

#[test]
fn test_multiple_declarators() {
    let arena = Bump::new();
    let program = parse(&arena, "let a, b = 2, c;").unwrap();
    let Statement::VariableStatement(stmt) = &program.body[0] else {
        panic!("expected a variable statement");
    };
    assert_eq!(stmt.declarations.len(), 3);
    assert!(stmt.declarations[0].init.is_none());
    assert!(stmt.declarations[1].init.is_some());
    assert!(stmt.declarations[2].init.is_none());
}

#[test]
fn test_dangling_initializer_is_rejected() {
    assert_eq!(
        parse_err("let x = ;"),
        SyntaxError::Parse(ParseError::UnexpectedToken {
            found: TokenKind::Semicolon,
            expected: TokenKind::Identifier,
        })
    );
}

#[test]
fn test_truncated_initializer_is_rejected() {
    assert!(matches!(
        parse_err("let x ="),
        SyntaxError::Parse(ParseError::UnexpectedEnd { .. })
    ));
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_if_without_else() {
    let arena = Bump::new();
    let program = parse(&arena, "if (x) y = 1;").unwrap();
    let Statement::IfStatement(stmt) = &program.body[0] else {
        panic!("expected an if statement");
    };
    assert!(stmt.alternate.is_none());
}

#[test]
fn test_if_with_else() {
    let arena = Bump::new();
    let program = parse(&arena, "if (x) { y = 1; } else { y = 2; }").unwrap();
    let Statement::IfStatement(stmt) = &program.body[0] else {
        panic!("expected an if statement");
    };
    assert!(stmt.alternate.is_some());
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let arena = Bump::new();
    let program = parse(&arena, "if (a) if (b) x = 1; else x = 2;").unwrap();
    let Statement::IfStatement(outer) = &program.body[0] else {
        panic!("expected an if statement");
    };
    assert!(outer.alternate.is_none());
    let Statement::IfStatement(inner) = outer.consequent else {
        panic!("expected a nested if in the consequent");
    };
    assert!(inner.alternate.is_some());
}

#[test]
fn test_while_statement() {
    let arena = Bump::new();
    let program = parse(&arena, "while (x > 0) x -= 1;").unwrap();
    assert!(matches!(program.body[0], Statement::WhileStatement(_)));
}

#[test]
fn test_do_while_statement() {
    let arena = Bump::new();
    let program = parse(&arena, "do { x -= 1; } while (x > 0);").unwrap();
    assert!(matches!(program.body[0], Statement::DoWhileStatement(_)));
}

#[test]
fn test_for_statement_full() {
    let arena = Bump::new();
    let program = parse(&arena, "for (let i = 0; i < 10; i += 1) { log(i); }").unwrap();
    let Statement::ForStatement(stmt) = &program.body[0] else {
        panic!("expected a for statement");
    };
    assert!(matches!(stmt.init, Some(ForInit::VariableStatement(_))));
    assert!(stmt.test.is_some());
    assert!(stmt.update.is_some());
}

#[test]
fn test_for_statement_expression_init() {
    let arena = Bump::new();
    let program = parse(&arena, "for (i = 0; i < 10; i += 1) step();").unwrap();
    let Statement::ForStatement(stmt) = &program.body[0] else {
        panic!("expected a for statement");
    };
    assert!(matches!(stmt.init, Some(ForInit::Expression(_))));
}

#[test]
fn test_for_statement_all_clauses_empty() {
    let arena = Bump::new();
    let program = parse(&arena, "for (;;) {}").unwrap();
    let Statement::ForStatement(stmt) = &program.body[0] else {
        panic!("expected a for statement");
    };
    assert!(stmt.init.is_none());
    assert!(stmt.test.is_none());
    assert!(stmt.update.is_none());
}

// ============================================================================
// Functions and returns
// ============================================================================

#[test]
fn test_function_declaration() {
    let arena = Bump::new();
    let program = parse(&arena, "def add(a, b) { return a + b; }").unwrap();
    let Statement::FunctionDeclaration(stmt) = &program.body[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(stmt.name.name, "add");
    assert_eq!(stmt.params.len(), 2);
    assert_eq!(stmt.params[0].name, "a");
    assert_eq!(stmt.body.body.len(), 1);
}

#[test]
fn test_function_without_params() {
    let arena = Bump::new();
    let program = parse(&arena, "def nop() {}").unwrap();
    let Statement::FunctionDeclaration(stmt) = &program.body[0] else {
        panic!("expected a function declaration");
    };
    assert!(stmt.params.is_empty());
}

#[test]
fn test_return_without_argument() {
    let arena = Bump::new();
    let program = parse(&arena, "def f() { return; }").unwrap();
    let Statement::FunctionDeclaration(stmt) = &program.body[0] else {
        panic!("expected a function declaration");
    };
    let Statement::ReturnStatement(ret) = &stmt.body.body[0] else {
        panic!("expected a return statement");
    };
    assert!(ret.argument.is_none());
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_declaration() {
    let arena = Bump::new();
    let program = parse(&arena, "class Point { def constructor(x) { this.x = x; } }").unwrap();
    let Statement::ClassDeclaration(stmt) = &program.body[0] else {
        panic!("expected a class declaration");
    };
    assert_eq!(stmt.id.name, "Point");
    assert!(stmt.super_class.is_none());
    assert_eq!(stmt.body.body.len(), 1);
}

#[test]
fn test_class_with_superclass() {
    let arena = Bump::new();
    let program = parse(&arena, "class Point3D extends Point {}").unwrap();
    let Statement::ClassDeclaration(stmt) = &program.body[0] else {
        panic!("expected a class declaration");
    };
    assert_eq!(stmt.super_class.as_ref().map(|s| s.name), Some("Point"));
}

#[test]
fn test_super_call() {
    let arena = Bump::new();
    let source = "class B extends A { def constructor(x) { super(x); } }";
    let program = parse(&arena, source).unwrap();
    let Statement::ClassDeclaration(class) = &program.body[0] else {
        panic!("expected a class declaration");
    };
    let Statement::FunctionDeclaration(ctor) = &class.body.body[0] else {
        panic!("expected a method");
    };
    let Statement::ExpressionStatement(stmt) = &ctor.body.body[0] else {
        panic!("expected an expression statement");
    };
    let Expression::CallExpression(call) = stmt.expression else {
        panic!("expected a call");
    };
    assert!(matches!(call.callee, Expression::SuperExpression(_)));
    assert_eq!(call.arguments.len(), 1);
}

#[test]
fn test_this_expression() {
    with_expression("this.x;", |expr| {
        let Expression::MemberExpression(member) = expr else {
            panic!("expected a member expression");
        };
        assert!(matches!(member.object, Expression::ThisExpression(_)));
    });
}

// ============================================================================
// Member, call and new expressions
// ============================================================================

#[test]
fn test_static_member_access() {
    with_expression("a.b.c;", |expr| {
        let Expression::MemberExpression(outer) = expr else {
            panic!("expected a member expression");
        };
        assert!(!outer.computed);
        assert!(matches!(outer.property, Expression::Identifier(Identifier { name: "c" })));
        let Expression::MemberExpression(inner) = outer.object else {
            panic!("expected a nested member expression");
        };
        assert!(matches!(inner.object, Expression::Identifier(Identifier { name: "a" })));
    });
}

#[test]
fn test_computed_member_access() {
    with_expression("a[i + 1];", |expr| {
        let Expression::MemberExpression(member) = expr else {
            panic!("expected a member expression");
        };
        assert!(member.computed);
        assert!(matches!(member.property, Expression::BinaryExpression(_)));
    });
}

#[test]
fn test_call_with_arguments() {
    with_expression("f(1, x, g());", |expr| {
        let Expression::CallExpression(call) = expr else {
            panic!("expected a call");
        };
        assert_eq!(call.arguments.len(), 3);
        assert!(matches!(call.arguments[2], Expression::CallExpression(_)));
    });
}

#[test]
fn test_chained_calls() {
    // f()() groups as (f())().
    with_expression("f()();", |expr| {
        let Expression::CallExpression(outer) = expr else {
            panic!("expected a call");
        };
        assert!(matches!(outer.callee, Expression::CallExpression(_)));
    });
}

#[test]
fn test_postfix_chain_after_call() {
    // a.b[0]().c groups as (((a.b)[0])()).c.
    with_expression("a.b[0]().c;", |expr| {
        let Expression::MemberExpression(outer) = expr else {
            panic!("expected a member expression at the top");
        };
        assert!(!outer.computed);
        let Expression::CallExpression(call) = outer.object else {
            panic!("expected the call under the .c access");
        };
        let Expression::MemberExpression(index) = call.callee else {
            panic!("expected the [0] access under the call");
        };
        assert!(index.computed);
        assert!(matches!(index.object, Expression::MemberExpression(_)));
    });
}

#[test]
fn test_new_expression() {
    with_expression("new Point(1, 2);", |expr| {
        let Expression::NewExpression(new) = expr else {
            panic!("expected a new expression");
        };
        assert!(matches!(new.callee, Expression::Identifier(Identifier { name: "Point" })));
        assert_eq!(new.arguments.len(), 2);
    });
}

#[test]
fn test_new_with_member_callee() {
    with_expression("new geo.Point(1);", |expr| {
        let Expression::NewExpression(new) = expr else {
            panic!("expected a new expression");
        };
        assert!(matches!(new.callee, Expression::MemberExpression(_)));
    });
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_lex_error_propagates() {
    assert!(matches!(parse_err("let x = @;"), SyntaxError::Lex(_)));
}

#[test]
fn test_non_ascii_digits_are_a_lex_error_not_zero() {
    // Must surface the tokenizer's rejection, never a NumericLiteral.
    assert!(matches!(parse_err("١٢٣;"), SyntaxError::Lex(_)));
}

#[test]
fn test_unexpected_token_in_expression_position() {
    assert_eq!(
        parse_err("1 + ;"),
        SyntaxError::Parse(ParseError::UnexpectedToken {
            found: TokenKind::Semicolon,
            expected: TokenKind::Identifier,
        })
    );
}

#[test]
fn test_unclosed_block() {
    assert!(matches!(
        parse_err("{ 1;"),
        SyntaxError::Parse(ParseError::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_deeply_nested_parens_are_rejected() {
    // Valid but pathologically nested input must fail cleanly instead of
    // exhausting the stack.
    let source = format!("{}1{};", "(".repeat(5000), ")".repeat(5000));
    assert_eq!(
        parse_err(&source),
        SyntaxError::Parse(ParseError::RecursionLimitExceeded)
    );
}

#[test]
fn test_deeply_nested_unary_is_rejected() {
    let source = format!("{}x;", "!".repeat(5000));
    assert_eq!(
        parse_err(&source),
        SyntaxError::Parse(ParseError::RecursionLimitExceeded)
    );
}

#[test]
fn test_deeply_nested_blocks_are_rejected() {
    let source = "{".repeat(5000);
    assert_eq!(
        parse_err(&source),
        SyntaxError::Parse(ParseError::RecursionLimitExceeded)
    );
}

#[test]
fn test_moderate_nesting_still_parses() {
    let source = format!("{}1{};", "(".repeat(50), ")".repeat(50));
    assert_eq!(statement_count(&source), 1);
}

#[test]
fn test_unclosed_paren() {
    assert!(matches!(
        parse_err("(1 + 2;"),
        SyntaxError::Parse(ParseError::UnexpectedToken {
            found: TokenKind::Semicolon,
            expected: TokenKind::CloseParen,
        })
    ));
}
