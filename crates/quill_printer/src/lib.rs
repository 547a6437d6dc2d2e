//! quill_printer: AST to text output.
//!
//! Renders a parsed program as an indented tree, one node per line. Each
//! node prints its type name, then its scalar fields and children one
//! indent level deeper. The output is meant for humans inspecting parser
//! output, not for machine consumption.

use quill_ast::node::*;

/// Options for the printer.
pub struct PrinterOptions {
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
    /// Whether to emit a trailing newline.
    pub trailing_newline: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
            trailing_newline: true,
        }
    }
}

/// The printer converts AST nodes to an indented tree dump.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options: PrinterOptions::default(),
        }
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
        }
    }

    /// Print a whole program to a string.
    pub fn print_program(&mut self, program: &Program<'_>) -> String {
        self.output.clear();
        self.line("Program");
        self.increase_indent();
        for (i, stmt) in program.body.iter().enumerate() {
            self.print_statement(&format!("body[{i}]"), stmt);
        }
        self.decrease_indent();
        if !self.options.trailing_newline {
            let trimmed = self.output.trim_end_matches(&self.options.new_line).len();
            self.output.truncate(trimmed);
        }
        self.output.clone()
    }

    // ========================================================================
    // Statement printing
    // ========================================================================

    fn print_statement(&mut self, label: &str, stmt: &Statement<'_>) {
        match stmt {
            Statement::ExpressionStatement(n) => {
                self.open(label, "ExpressionStatement");
                self.increase_indent();
                self.print_expression("expression", n.expression);
                self.decrease_indent();
            }
            Statement::BlockStatement(n) => self.print_block(label, n),
            Statement::EmptyStatement(_) => self.open(label, "EmptyStatement"),
            Statement::VariableStatement(n) => self.print_variable_statement(label, n),
            Statement::IfStatement(n) => {
                self.open(label, "IfStatement");
                self.increase_indent();
                self.print_expression("test", n.test);
                self.print_statement("consequent", n.consequent);
                if let Some(alternate) = n.alternate {
                    self.print_statement("alternate", alternate);
                }
                self.decrease_indent();
            }
            Statement::WhileStatement(n) => {
                self.open(label, "WhileStatement");
                self.increase_indent();
                self.print_expression("test", n.test);
                self.print_statement("body", n.body);
                self.decrease_indent();
            }
            Statement::DoWhileStatement(n) => {
                self.open(label, "DoWhileStatement");
                self.increase_indent();
                self.print_statement("body", n.body);
                self.print_expression("test", n.test);
                self.decrease_indent();
            }
            Statement::ForStatement(n) => self.print_for_statement(label, n),
            Statement::FunctionDeclaration(n) => {
                self.open(label, "FunctionDeclaration");
                self.increase_indent();
                self.print_identifier("name", &n.name);
                for (i, param) in n.params.iter().enumerate() {
                    self.print_identifier(&format!("params[{i}]"), param);
                }
                self.print_block("body", &n.body);
                self.decrease_indent();
            }
            Statement::ReturnStatement(n) => {
                self.open(label, "ReturnStatement");
                if let Some(argument) = n.argument {
                    self.increase_indent();
                    self.print_expression("argument", argument);
                    self.decrease_indent();
                }
            }
            Statement::ClassDeclaration(n) => {
                self.open(label, "ClassDeclaration");
                self.increase_indent();
                self.print_identifier("id", &n.id);
                if let Some(ref super_class) = n.super_class {
                    self.print_identifier("superClass", super_class);
                }
                self.print_block("body", &n.body);
                self.decrease_indent();
            }
        }
    }

    fn print_block(&mut self, label: &str, node: &BlockStatement<'_>) {
        self.open(label, "BlockStatement");
        self.increase_indent();
        for (i, stmt) in node.body.iter().enumerate() {
            self.print_statement(&format!("body[{i}]"), stmt);
        }
        self.decrease_indent();
    }

    fn print_variable_statement(&mut self, label: &str, node: &VariableStatement<'_>) {
        self.open(label, "VariableStatement");
        self.increase_indent();
        for (i, decl) in node.declarations.iter().enumerate() {
            self.open(&format!("declarations[{i}]"), "VariableDeclaration");
            self.increase_indent();
            self.print_identifier("id", &decl.id);
            if let Some(init) = decl.init {
                self.print_expression("init", init);
            }
            self.decrease_indent();
        }
        self.decrease_indent();
    }

    fn print_for_statement(&mut self, label: &str, node: &ForStatement<'_>) {
        self.open(label, "ForStatement");
        self.increase_indent();
        match node.init {
            Some(ForInit::VariableStatement(ref vs)) => self.print_variable_statement("init", vs),
            Some(ForInit::Expression(expr)) => self.print_expression("init", expr),
            None => {}
        }
        if let Some(test) = node.test {
            self.print_expression("test", test);
        }
        if let Some(update) = node.update {
            self.print_expression("update", update);
        }
        self.print_statement("body", node.body);
        self.decrease_indent();
    }

    // ========================================================================
    // Expression printing
    // ========================================================================

    fn print_expression(&mut self, label: &str, expr: &Expression<'_>) {
        match expr {
            Expression::NumericLiteral(n) => {
                self.open(label, "NumericLiteral");
                self.increase_indent();
                self.line(&format!("value: {}", n.value));
                self.decrease_indent();
            }
            Expression::StringLiteral(n) => {
                self.open(label, "StringLiteral");
                self.increase_indent();
                self.line(&format!("value: {:?}", n.value));
                self.decrease_indent();
            }
            Expression::BooleanLiteral(n) => {
                self.open(label, "BooleanLiteral");
                self.increase_indent();
                self.line(&format!("value: {}", n.value));
                self.decrease_indent();
            }
            Expression::NullLiteral(_) => self.open(label, "NullLiteral"),
            Expression::Identifier(n) => self.print_identifier(label, n),
            Expression::BinaryExpression(n) => {
                self.open(label, "BinaryExpression");
                self.increase_indent();
                self.line(&format!("operator: {:?}", n.operator));
                self.print_expression("left", n.left);
                self.print_expression("right", n.right);
                self.decrease_indent();
            }
            Expression::LogicalExpression(n) => {
                self.open(label, "LogicalExpression");
                self.increase_indent();
                self.line(&format!("operator: {:?}", n.operator));
                self.print_expression("left", n.left);
                self.print_expression("right", n.right);
                self.decrease_indent();
            }
            Expression::AssignmentExpression(n) => {
                self.open(label, "AssignmentExpression");
                self.increase_indent();
                self.line(&format!("operator: {:?}", n.operator));
                self.print_expression("left", n.left);
                self.print_expression("right", n.right);
                self.decrease_indent();
            }
            Expression::UnaryExpression(n) => {
                self.open(label, "UnaryExpression");
                self.increase_indent();
                self.line(&format!("operator: {:?}", n.operator));
                self.print_expression("argument", n.argument);
                self.decrease_indent();
            }
            Expression::MemberExpression(n) => {
                self.open(label, "MemberExpression");
                self.increase_indent();
                self.line(&format!("computed: {}", n.computed));
                self.print_expression("object", n.object);
                self.print_expression("property", n.property);
                self.decrease_indent();
            }
            Expression::CallExpression(n) => {
                self.open(label, "CallExpression");
                self.increase_indent();
                self.print_expression("callee", n.callee);
                for (i, arg) in n.arguments.iter().enumerate() {
                    self.print_expression(&format!("arguments[{i}]"), arg);
                }
                self.decrease_indent();
            }
            Expression::NewExpression(n) => {
                self.open(label, "NewExpression");
                self.increase_indent();
                self.print_expression("callee", n.callee);
                for (i, arg) in n.arguments.iter().enumerate() {
                    self.print_expression(&format!("arguments[{i}]"), arg);
                }
                self.decrease_indent();
            }
            Expression::ThisExpression(_) => self.open(label, "ThisExpression"),
            Expression::SuperExpression(_) => self.open(label, "SuperExpression"),
        }
    }

    fn print_identifier(&mut self, label: &str, id: &Identifier<'_>) {
        self.open(label, "Identifier");
        self.increase_indent();
        self.line(&format!("name: {:?}", id.name));
        self.decrease_indent();
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    /// `label: NodeType` on its own line.
    fn open(&mut self, label: &str, type_name: &str) {
        self.line(&format!("{label}: {type_name}"));
    }

    fn line(&mut self, text: &str) {
        self.write_indent();
        self.output.push_str(text);
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}
