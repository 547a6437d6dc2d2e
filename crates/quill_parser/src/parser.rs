//! The Quill parser implementation.
//!
//! A predictive recursive descent parser. Every production is built from
//! sequences of `eat` calls plus branching on the single lookahead token;
//! there is no backtracking. The first error anywhere in the descent aborts
//! the whole parse.

use bumpalo::Bump;
use quill_ast::node::*;
use quill_ast::TokenKind;
use quill_diagnostics::{ParseError, SyntaxError};
use quill_tokenizer::{Token, Tokenizer};

/// Maximum recursion depth to prevent stack overflow on deeply nested input.
const MAX_RECURSION_DEPTH: u32 = 200;

/// Parse `source` into a [`Program`], allocating AST nodes in `arena`.
///
/// The returned tree borrows both the arena and the source text.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<Program<'a>, SyntaxError> {
    Parser::new(arena, source).parse_program()
}

/// The parser produces a Program AST from Quill source text.
///
/// A parser is single-use: it owns a tokenizer positioned at the start of
/// one source string and is consumed by [`Parser::parse_program`], so no
/// state can leak between parses.
pub struct Parser<'a> {
    arena: &'a Bump,
    tokenizer: Tokenizer<'a>,
    /// The single token of lookahead; `None` once input is exhausted.
    lookahead: Option<Token<'a>>,
    /// Tracks recursion depth to prevent stack overflow on deeply nested
    /// input.
    recursion_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, source: &'a str) -> Self {
        Self {
            arena,
            tokenizer: Tokenizer::new(source),
            lookahead: None,
            recursion_depth: 0,
        }
    }

    /// Parse the whole source unit: statements until input is exhausted.
    /// An empty source yields a Program with an empty body.
    pub fn parse_program(mut self) -> Result<Program<'a>, SyntaxError> {
        self.lookahead = self.tokenizer.next_token()?;
        let mut body = Vec::new();
        while self.lookahead.is_some() {
            body.push(self.parse_statement()?);
        }
        Ok(Program {
            body: self.alloc_slice(body),
        })
    }

    // ========================================================================
    // Token management
    // ========================================================================

    #[inline]
    fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.map(|t| t.kind)
    }

    #[inline]
    fn at(&self, kind: TokenKind) -> bool {
        self.lookahead.is_some_and(|t| t.kind == kind)
    }

    /// Consume the lookahead token, which must be of the expected kind, and
    /// pull the next token into the lookahead slot. This is the only place
    /// tokens are consumed.
    fn eat(&mut self, expected: TokenKind) -> Result<Token<'a>, SyntaxError> {
        let Some(token) = self.lookahead else {
            return Err(ParseError::UnexpectedEnd { expected }.into());
        };
        if token.kind != expected {
            return Err(ParseError::UnexpectedToken {
                found: token.kind,
                expected,
            }
            .into());
        }
        self.lookahead = self.tokenizer.next_token()?;
        Ok(token)
    }

    /// Bump the depth counter on entry to a self-recursive production.
    /// A failed check ends the whole parse, so the counter is only unwound
    /// by [`Parser::leave_nested`] on the success paths.
    fn enter_nested(&mut self) -> Result<(), SyntaxError> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(ParseError::RecursionLimitExceeded.into());
        }
        Ok(())
    }

    fn leave_nested(&mut self) {
        self.recursion_depth -= 1;
    }

    // ========================================================================
    // Arena helpers
    // ========================================================================

    #[inline]
    fn alloc_expression(&self, expression: Expression<'a>) -> &'a Expression<'a> {
        self.arena.alloc(expression)
    }

    #[inline]
    fn alloc_statement(&self, statement: Statement<'a>) -> &'a Statement<'a> {
        self.arena.alloc(statement)
    }

    #[inline]
    fn alloc_slice<T>(&self, items: Vec<T>) -> &'a [T] {
        self.arena.alloc_slice_fill_iter(items)
    }

    // ========================================================================
    // Statement parsing
    // ========================================================================

    fn parse_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.enter_nested()?;
        let result = match self.lookahead_kind() {
            Some(TokenKind::Semicolon) => self.parse_empty_statement(),
            Some(TokenKind::OpenBrace) => {
                Ok(Statement::BlockStatement(self.parse_block_statement()?))
            }
            Some(TokenKind::LetKeyword) => Ok(Statement::VariableStatement(
                self.parse_variable_statement(true)?,
            )),
            Some(TokenKind::IfKeyword) => self.parse_if_statement(),
            Some(TokenKind::DefKeyword) => self.parse_function_declaration(),
            Some(TokenKind::ClassKeyword) => self.parse_class_declaration(),
            Some(TokenKind::ReturnKeyword) => self.parse_return_statement(),
            Some(TokenKind::WhileKeyword) => self.parse_while_statement(),
            Some(TokenKind::DoKeyword) => self.parse_do_while_statement(),
            Some(TokenKind::ForKeyword) => self.parse_for_statement(),
            _ => self.parse_expression_statement(),
        };
        self.leave_nested();
        result
    }

    /// One or more statements, up to (not including) the stop kind or the
    /// end of input.
    fn parse_statement_list(
        &mut self,
        stop: TokenKind,
    ) -> Result<Vec<Statement<'a>>, SyntaxError> {
        let mut statements = vec![self.parse_statement()?];
        while self.lookahead.is_some_and(|t| t.kind != stop) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_empty_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::EmptyStatement(EmptyStatement {}))
    }

    fn parse_block_statement(&mut self) -> Result<BlockStatement<'a>, SyntaxError> {
        self.eat(TokenKind::OpenBrace)?;
        let body = if self.at(TokenKind::CloseBrace) {
            Vec::new()
        } else {
            self.parse_statement_list(TokenKind::CloseBrace)?
        };
        self.eat(TokenKind::CloseBrace)?;
        Ok(BlockStatement {
            body: self.alloc_slice(body),
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        let expression = self.parse_expression()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::ExpressionStatement(ExpressionStatement {
            expression: self.alloc_expression(expression),
        }))
    }

    /// `let` declarations. The terminating `;` is consumed only when
    /// `eat_terminator` is set: a `for` initializer leaves it to the
    /// surrounding `for` syntax.
    fn parse_variable_statement(
        &mut self,
        eat_terminator: bool,
    ) -> Result<VariableStatement<'a>, SyntaxError> {
        self.eat(TokenKind::LetKeyword)?;
        let mut declarations = vec![self.parse_variable_declaration()?];
        while self.at(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            declarations.push(self.parse_variable_declaration()?);
        }
        if eat_terminator {
            self.eat(TokenKind::Semicolon)?;
        }
        Ok(VariableStatement {
            declarations: self.alloc_slice(declarations),
        })
    }

    fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration<'a>, SyntaxError> {
        let id = self.parse_identifier_node()?;
        // No initializer if the declaration ends here.
        let init = match self.lookahead_kind() {
            Some(TokenKind::Semicolon) | Some(TokenKind::Comma) | None => None,
            _ => {
                self.eat(TokenKind::SimpleAssignment)?;
                let init = self.parse_assignment_expression()?;
                Some(self.alloc_expression(init))
            }
        };
        Ok(VariableDeclaration { id, init })
    }

    fn parse_if_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::IfKeyword)?;
        self.eat(TokenKind::OpenParen)?;
        let test = self.parse_expression()?;
        self.eat(TokenKind::CloseParen)?;
        let consequent = self.parse_statement()?;
        // The innermost `if` claims the `else`, so a dangling `else` binds
        // to the nearest unmatched `if`.
        let alternate = if self.at(TokenKind::ElseKeyword) {
            self.eat(TokenKind::ElseKeyword)?;
            let alternate = self.parse_statement()?;
            Some(self.alloc_statement(alternate))
        } else {
            None
        };
        Ok(Statement::IfStatement(IfStatement {
            test: self.alloc_expression(test),
            consequent: self.alloc_statement(consequent),
            alternate,
        }))
    }

    fn parse_while_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::WhileKeyword)?;
        self.eat(TokenKind::OpenParen)?;
        let test = self.parse_expression()?;
        self.eat(TokenKind::CloseParen)?;
        let body = self.parse_statement()?;
        Ok(Statement::WhileStatement(WhileStatement {
            test: self.alloc_expression(test),
            body: self.alloc_statement(body),
        }))
    }

    fn parse_do_while_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::DoKeyword)?;
        let body = self.parse_statement()?;
        self.eat(TokenKind::WhileKeyword)?;
        self.eat(TokenKind::OpenParen)?;
        let test = self.parse_expression()?;
        self.eat(TokenKind::CloseParen)?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::DoWhileStatement(DoWhileStatement {
            body: self.alloc_statement(body),
            test: self.alloc_expression(test),
        }))
    }

    fn parse_for_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::ForKeyword)?;
        self.eat(TokenKind::OpenParen)?;

        let init = match self.lookahead_kind() {
            Some(TokenKind::Semicolon) => None,
            Some(TokenKind::LetKeyword) => Some(ForInit::VariableStatement(
                self.parse_variable_statement(false)?,
            )),
            _ => {
                let init = self.parse_expression()?;
                Some(ForInit::Expression(self.alloc_expression(init)))
            }
        };
        self.eat(TokenKind::Semicolon)?;

        let test = if self.at(TokenKind::Semicolon) {
            None
        } else {
            let test = self.parse_expression()?;
            Some(&*self.alloc_expression(test))
        };
        self.eat(TokenKind::Semicolon)?;

        let update = if self.at(TokenKind::CloseParen) {
            None
        } else {
            let update = self.parse_expression()?;
            Some(&*self.alloc_expression(update))
        };
        self.eat(TokenKind::CloseParen)?;

        let body = self.parse_statement()?;
        Ok(Statement::ForStatement(ForStatement {
            init,
            test,
            update,
            body: self.alloc_statement(body),
        }))
    }

    fn parse_function_declaration(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::DefKeyword)?;
        let name = self.parse_identifier_node()?;
        self.eat(TokenKind::OpenParen)?;
        let params = if self.at(TokenKind::CloseParen) {
            Vec::new()
        } else {
            self.parse_parameter_list()?
        };
        self.eat(TokenKind::CloseParen)?;
        let body = self.parse_block_statement()?;
        Ok(Statement::FunctionDeclaration(FunctionDeclaration {
            name,
            params: self.alloc_slice(params),
            body,
        }))
    }

    fn parse_parameter_list(&mut self) -> Result<Vec<Identifier<'a>>, SyntaxError> {
        let mut params = vec![self.parse_identifier_node()?];
        while self.at(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            params.push(self.parse_identifier_node()?);
        }
        Ok(params)
    }

    fn parse_return_statement(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::ReturnKeyword)?;
        let argument = if self.at(TokenKind::Semicolon) {
            None
        } else {
            let argument = self.parse_expression()?;
            Some(&*self.alloc_expression(argument))
        };
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::ReturnStatement(ReturnStatement { argument }))
    }

    /// `class Name (extends Super)? { ... }`. The body is parsed as an
    /// ordinary block; the grammar places no restriction on what statements
    /// appear inside it.
    fn parse_class_declaration(&mut self) -> Result<Statement<'a>, SyntaxError> {
        self.eat(TokenKind::ClassKeyword)?;
        let id = self.parse_identifier_node()?;
        let super_class = if self.at(TokenKind::ExtendsKeyword) {
            self.eat(TokenKind::ExtendsKeyword)?;
            Some(self.parse_identifier_node()?)
        } else {
            None
        };
        let body = self.parse_block_statement()?;
        Ok(Statement::ClassDeclaration(ClassDeclaration {
            id,
            super_class,
            body,
        }))
    }

    // ========================================================================
    // Expression parsing: the precedence chain
    // ========================================================================

    fn parse_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        self.parse_assignment_expression()
    }

    /// Assignment is right-associative: the right-hand side recurses on this
    /// production. Every re-entry into the expression grammar (parentheses,
    /// computed members, argument lists, initializers) funnels through here,
    /// so this is where the expression depth is counted.
    fn parse_assignment_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        self.enter_nested()?;
        let result = match self.parse_logical_or_expression() {
            Ok(left) if self.at_assignment_operator() => self.finish_assignment(left),
            other => other,
        };
        self.leave_nested();
        result
    }

    /// The `op= right` tail. The left operand must be an identifier or a
    /// member expression, checked before the right-hand side is parsed.
    fn finish_assignment(&mut self, left: Expression<'a>) -> Result<Expression<'a>, SyntaxError> {
        let operator = self.eat_assignment_operator()?;
        if !left.is_assignment_target() {
            return Err(ParseError::InvalidAssignmentTarget.into());
        }
        let right = self.parse_assignment_expression()?;
        Ok(Expression::AssignmentExpression(AssignmentExpression {
            operator: operator.text,
            left: self.alloc_expression(left),
            right: self.alloc_expression(right),
        }))
    }

    fn at_assignment_operator(&self) -> bool {
        matches!(
            self.lookahead_kind(),
            Some(TokenKind::SimpleAssignment | TokenKind::ComplexAssignment)
        )
    }

    fn eat_assignment_operator(&mut self) -> Result<Token<'a>, SyntaxError> {
        if self.at(TokenKind::ComplexAssignment) {
            self.eat(TokenKind::ComplexAssignment)
        } else {
            self.eat(TokenKind::SimpleAssignment)
        }
    }

    fn parse_logical_or_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let mut left = self.parse_logical_and_expression()?;
        while self.at(TokenKind::LogicalOr) {
            let operator = self.eat(TokenKind::LogicalOr)?;
            let right = self.parse_logical_and_expression()?;
            left = Expression::LogicalExpression(LogicalExpression {
                operator: operator.text,
                left: self.alloc_expression(left),
                right: self.alloc_expression(right),
            });
        }
        Ok(left)
    }

    fn parse_logical_and_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let mut left = self.parse_equality_expression()?;
        while self.at(TokenKind::LogicalAnd) {
            let operator = self.eat(TokenKind::LogicalAnd)?;
            let right = self.parse_equality_expression()?;
            left = Expression::LogicalExpression(LogicalExpression {
                operator: operator.text,
                left: self.alloc_expression(left),
                right: self.alloc_expression(right),
            });
        }
        Ok(left)
    }

    fn parse_equality_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let mut left = self.parse_relational_expression()?;
        while self.at(TokenKind::EqualityOperator) {
            let operator = self.eat(TokenKind::EqualityOperator)?;
            let right = self.parse_relational_expression()?;
            left = self.binary(operator, left, right);
        }
        Ok(left)
    }

    fn parse_relational_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let mut left = self.parse_additive_expression()?;
        while self.at(TokenKind::RelationalOperator) {
            let operator = self.eat(TokenKind::RelationalOperator)?;
            let right = self.parse_additive_expression()?;
            left = self.binary(operator, left, right);
        }
        Ok(left)
    }

    fn parse_additive_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let mut left = self.parse_multiplicative_expression()?;
        while self.at(TokenKind::AdditiveOperator) {
            let operator = self.eat(TokenKind::AdditiveOperator)?;
            let right = self.parse_multiplicative_expression()?;
            left = self.binary(operator, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let mut left = self.parse_unary_expression()?;
        while self.at(TokenKind::MultiplicativeOperator) {
            let operator = self.eat(TokenKind::MultiplicativeOperator)?;
            let right = self.parse_unary_expression()?;
            left = self.binary(operator, left, right);
        }
        Ok(left)
    }

    /// Fold one left-associative binary step.
    fn binary(
        &self,
        operator: Token<'a>,
        left: Expression<'a>,
        right: Expression<'a>,
    ) -> Expression<'a> {
        Expression::BinaryExpression(BinaryExpression {
            operator: operator.text,
            left: self.alloc_expression(left),
            right: self.alloc_expression(right),
        })
    }

    fn parse_unary_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let operator = match self.lookahead_kind() {
            Some(TokenKind::AdditiveOperator) => Some(self.eat(TokenKind::AdditiveOperator)?),
            Some(TokenKind::LogicalNot) => Some(self.eat(TokenKind::LogicalNot)?),
            _ => None,
        };
        if let Some(operator) = operator {
            self.enter_nested()?;
            let argument = self.parse_unary_expression();
            self.leave_nested();
            let argument = argument?;
            return Ok(Expression::UnaryExpression(UnaryExpression {
                operator: operator.text,
                argument: self.alloc_expression(argument),
            }));
        }
        self.parse_left_hand_side_expression()
    }

    // ========================================================================
    // Left-hand side, member and call expressions
    // ========================================================================

    fn parse_left_hand_side_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        self.parse_call_member_expression()
    }

    fn parse_call_member_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        // `super` is only legal as a call target and must be followed by an
        // argument list.
        if self.at(TokenKind::SuperKeyword) {
            self.eat(TokenKind::SuperKeyword)?;
            let callee = self.alloc_expression(Expression::SuperExpression(SuperExpression {}));
            let arguments = self.parse_arguments()?;
            let call = Expression::CallExpression(CallExpression { callee, arguments });
            return self.parse_call_tail(call);
        }
        let member = self.parse_member_expression()?;
        if self.at(TokenKind::OpenParen) {
            self.parse_call_tail(member)
        } else {
            Ok(member)
        }
    }

    /// After a call, keep folding postfix chains left-to-right: further
    /// calls (`f()()`), member access (`f().x`) and computed access
    /// (`f()[i]`).
    fn parse_call_tail(&mut self, mut expr: Expression<'a>) -> Result<Expression<'a>, SyntaxError> {
        loop {
            match self.lookahead_kind() {
                Some(TokenKind::OpenParen) => {
                    let callee = self.alloc_expression(expr);
                    let arguments = self.parse_arguments()?;
                    expr = Expression::CallExpression(CallExpression { callee, arguments });
                }
                Some(TokenKind::Dot) => {
                    self.eat(TokenKind::Dot)?;
                    let property = Expression::Identifier(self.parse_identifier_node()?);
                    expr = Expression::MemberExpression(MemberExpression {
                        computed: false,
                        object: self.alloc_expression(expr),
                        property: self.alloc_expression(property),
                    });
                }
                Some(TokenKind::OpenBracket) => {
                    self.eat(TokenKind::OpenBracket)?;
                    let property = self.parse_expression()?;
                    self.eat(TokenKind::CloseBracket)?;
                    expr = Expression::MemberExpression(MemberExpression {
                        computed: true,
                        object: self.alloc_expression(expr),
                        property: self.alloc_expression(property),
                    });
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Chained and mixed `.name` / `[expr]` access. Stops before `(` so a
    /// `new` callee never swallows the argument list.
    fn parse_member_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let mut object = self.parse_primary_expression()?;
        loop {
            match self.lookahead_kind() {
                Some(TokenKind::Dot) => {
                    self.eat(TokenKind::Dot)?;
                    let property = Expression::Identifier(self.parse_identifier_node()?);
                    object = Expression::MemberExpression(MemberExpression {
                        computed: false,
                        object: self.alloc_expression(object),
                        property: self.alloc_expression(property),
                    });
                }
                Some(TokenKind::OpenBracket) => {
                    self.eat(TokenKind::OpenBracket)?;
                    let property = self.parse_expression()?;
                    self.eat(TokenKind::CloseBracket)?;
                    object = Expression::MemberExpression(MemberExpression {
                        computed: true,
                        object: self.alloc_expression(object),
                        property: self.alloc_expression(property),
                    });
                }
                _ => return Ok(object),
            }
        }
    }

    /// A parenthesized, comma-separated argument list. Arguments are
    /// assignment expressions, so `f(x = 1)` is legal.
    fn parse_arguments(&mut self) -> Result<NodeList<'a, Expression<'a>>, SyntaxError> {
        self.eat(TokenKind::OpenParen)?;
        let mut arguments = Vec::new();
        if !self.at(TokenKind::CloseParen) {
            loop {
                arguments.push(self.parse_assignment_expression()?);
                if !self.at(TokenKind::Comma) {
                    break;
                }
                self.eat(TokenKind::Comma)?;
            }
        }
        self.eat(TokenKind::CloseParen)?;
        Ok(self.alloc_slice(arguments))
    }

    // ========================================================================
    // Primary expressions and literals
    // ========================================================================

    fn parse_primary_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        match self.lookahead_kind() {
            Some(
                TokenKind::Number
                | TokenKind::String
                | TokenKind::TrueKeyword
                | TokenKind::FalseKeyword
                | TokenKind::NullKeyword,
            ) => self.parse_literal(),
            Some(TokenKind::OpenParen) => self.parse_parenthesized_expression(),
            Some(TokenKind::Identifier) => {
                Ok(Expression::Identifier(self.parse_identifier_node()?))
            }
            Some(TokenKind::ThisKeyword) => {
                self.eat(TokenKind::ThisKeyword)?;
                Ok(Expression::ThisExpression(ThisExpression {}))
            }
            Some(TokenKind::NewKeyword) => self.parse_new_expression(),
            Some(found) => Err(ParseError::UnexpectedToken {
                found,
                expected: TokenKind::Identifier,
            }
            .into()),
            None => Err(ParseError::UnexpectedEnd {
                expected: TokenKind::Identifier,
            }
            .into()),
        }
    }

    /// `( Expression )` — grouping only, no node of its own.
    fn parse_parenthesized_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        self.eat(TokenKind::OpenParen)?;
        let expression = self.parse_expression()?;
        self.eat(TokenKind::CloseParen)?;
        Ok(expression)
    }

    /// `new Callee(args)` where the callee is a member expression. Member
    /// access on the result (`new Point(1).x`) is handled by the enclosing
    /// member production.
    fn parse_new_expression(&mut self) -> Result<Expression<'a>, SyntaxError> {
        self.eat(TokenKind::NewKeyword)?;
        // The callee recurses back through this production for `new new ..`.
        self.enter_nested()?;
        let callee = self.parse_member_expression();
        self.leave_nested();
        let callee = callee?;
        let arguments = self.parse_arguments()?;
        Ok(Expression::NewExpression(NewExpression {
            callee: self.alloc_expression(callee),
            arguments,
        }))
    }

    fn parse_identifier_node(&mut self) -> Result<Identifier<'a>, SyntaxError> {
        let token = self.eat(TokenKind::Identifier)?;
        Ok(Identifier { name: token.text })
    }

    fn parse_literal(&mut self) -> Result<Expression<'a>, SyntaxError> {
        match self.lookahead_kind() {
            Some(TokenKind::Number) => self.parse_numeric_literal(),
            Some(TokenKind::String) => self.parse_string_literal(),
            Some(TokenKind::TrueKeyword) => {
                self.eat(TokenKind::TrueKeyword)?;
                Ok(Expression::BooleanLiteral(BooleanLiteral { value: true }))
            }
            Some(TokenKind::FalseKeyword) => {
                self.eat(TokenKind::FalseKeyword)?;
                Ok(Expression::BooleanLiteral(BooleanLiteral { value: false }))
            }
            Some(TokenKind::NullKeyword) => {
                self.eat(TokenKind::NullKeyword)?;
                Ok(Expression::NullLiteral(NullLiteral {}))
            }
            Some(found) => Err(ParseError::UnrecognizedLiteral { found }.into()),
            None => Err(ParseError::UnexpectedEnd {
                expected: TokenKind::Number,
            }
            .into()),
        }
    }

    fn parse_numeric_literal(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let token = self.eat(TokenKind::Number)?;
        // The NUMBER rule only admits ASCII digit runs, which always parse.
        let value = token.text.parse::<f64>().unwrap_or_default();
        Ok(Expression::NumericLiteral(NumericLiteral { value }))
    }

    /// The value is the raw text between the quotes; escape sequences are
    /// not decoded.
    fn parse_string_literal(&mut self) -> Result<Expression<'a>, SyntaxError> {
        let token = self.eat(TokenKind::String)?;
        let value = &token.text[1..token.text.len() - 1];
        Ok(Expression::StringLiteral(StringLiteral { value }))
    }
}
