//! Pratt parser for the Sugiru language.
//!
//! Statements are parsed by recursive descent. Expressions are parsed by
//! precedence climbing: each token kind may have a prefix handler (it starts
//! an expression) and an infix handler (it continues one), and the
//! [`Precedence`] of the upcoming token decides whether the current
//! expression absorbs it.
//!
//! The parser never aborts. Structural problems are recorded as
//! [`ParserError`]s and the offending construct is dropped, so later
//! statements are still parsed and reported.
//!
//! # Examples
//!
//! ```
//! use sugiru_syntax::{Lexer, Parser};
//!
//! let mut parser = Parser::new(Lexer::new("let x = 1 + 2 * 3;"));
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```

use crate::ast::{
    BlockStatement, BooleanLiteral, CallExpression, Expression,
    ExpressionStatement, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, IntegerLiteral, LetStatement, PrefixExpression, Program,
    ReturnStatement, Statement,
};
use crate::error::ParserError;
use crate::lexer::Lexer;
use crate::precedence::Precedence;
use crate::token::{Token, TokenKind};
use sugiru_log::{debug, trace};

/// How deeply expressions may nest before the parser gives up on the input.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Builds an expression starting at the current token.
type PrefixParseFn<'input> = fn(&mut Parser<'input>) -> Option<Expression>;

/// Continues an expression whose left operand has already been parsed. The
/// current token is the operator.
///
/// The left operand may be absent after an earlier error; the handler still
/// consumes its own tokens so the parser stays in step, then yields nothing.
type InfixParseFn<'input> =
    fn(&mut Parser<'input>, Option<Expression>) -> Option<Expression>;

/// Parser over a token stream pulled lazily from a [`Lexer`].
///
/// The parser looks at two tokens at a time: `cur_token`, the token being
/// parsed, and `peek_token`, the one after it.
pub struct Parser<'input> {
    /// Token source
    lexer: Lexer<'input>,
    /// Token under examination
    cur_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Accumulated diagnostics
    errors: Vec<ParserError>,
    /// Expressions currently being parsed
    depth: usize,
    /// Set once the nesting limit is hit; later diagnostics are suppressed
    abandoned: bool,
}

impl<'input> Parser<'input> {
    /// Creates a parser and primes the two-token window.
    #[must_use]
    pub fn new(lexer: Lexer<'input>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
            depth: 0,
            abandoned: false,
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are left out of the program; the reason
    /// is available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        debug!(
            "parsed {} statement(s) with {} error(s)",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    /// Returns the diagnostics recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    /// Returns the diagnostics rendered as messages.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Returns `true` if any diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParserError> {
        self.errors
    }

    // ===== Token window =====

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advances onto the next token if it has the given kind; otherwise
    /// records an error and stays put.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.peek_error(kind);
            None
        }
    }

    /// Consumes a trailing `;` if there is one.
    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    // ===== Diagnostics =====

    fn emit_error(&mut self, error: ParserError) {
        if self.abandoned {
            return;
        }
        debug!("parse error: {}", error);
        self.errors.push(error);
    }

    /// Records the nesting error and skips to the end of input, so the
    /// enclosing handlers unwind without recording errors of their own.
    fn abandon(&mut self) {
        self.emit_error(ParserError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });
        self.abandoned = true;
        while !self.cur_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let found = self.peek_token.clone();
        self.emit_error(ParserError::UnexpectedToken { expected, found });
    }

    // ===== Statements =====

    fn parse_statement(&mut self) -> Option<Statement> {
        trace!("statement at {}", self.cur_token);
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expression> [;]`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::from_token(self.cur_token.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Let(LetStatement {
            token,
            name,
            value: value?,
        }))
    }

    /// `return <expression> [;]`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();
        self.next_token();

        let return_value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Return(ReturnStatement {
            token,
            return_value: return_value?,
        }))
    }

    /// `<expression> [;]`
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Expression(ExpressionStatement {
            token,
            expression: expression?,
        }))
    }

    /// Parses statements from the current `{` up to the matching `}` or the
    /// end of input, leaving the cursor on the closing token.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }

    // ===== Expressions =====

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.abandon();
            return None;
        }

        self.depth += 1;
        let expression = self.parse_expression_at_depth(precedence);
        self.depth -= 1;
        expression
    }

    fn parse_expression_at_depth(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = Self::prefix_parser(self.cur_token.kind) else {
            self.emit_error(ParserError::NoPrefixParser {
                kind: self.cur_token.kind,
            });
            return None;
        };

        let mut left = prefix(self);

        while !self.peek_is(TokenKind::Semicolon)
            && precedence < self.peek_precedence()
        {
            let Some(infix) = Self::infix_parser(self.peek_token.kind) else {
                return left;
            };
            self.next_token();
            left = infix(self, left);
        }

        left
    }

    /// Returns the handler for token kinds that can start an expression.
    fn prefix_parser(kind: TokenKind) -> Option<PrefixParseFn<'input>> {
        let handler: PrefixParseFn<'input> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            _ => return None,
        };
        Some(handler)
    }

    /// Returns the handler for token kinds that can continue an expression.
    fn infix_parser(kind: TokenKind) -> Option<InfixParseFn<'input>> {
        let handler: InfixParseFn<'input> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            _ => return None,
        };
        Some(handler)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::from_token(
            self.cur_token.clone(),
        )))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => {
                self.emit_error(ParserError::InvalidInteger {
                    literal: token.literal,
                });
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(BooleanLiteral {
            token: self.cur_token.clone(),
            value: self.cur_is(TokenKind::True),
        }))
    }

    /// `!<expression>` or `-<expression>`; the operand binds at prefix
    /// strength, so `-a * b` is `(-a) * b`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// `<left> <op> <right>`. The right side is parsed at the operator's own
    /// precedence, which makes chains of equal precedence group to the left.
    fn parse_infix_expression(
        &mut self,
        left: Option<Expression>,
    ) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence);

        Some(Expression::Infix(InfixExpression {
            token,
            operator,
            left: Box::new(left?),
            right: Box::new(right?),
        }))
    }

    /// `( <expression> )`
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest);
        self.expect_peek(TokenKind::RParen)?;

        expression
    }

    /// `if ( <condition> ) { ... } [else { ... }]`
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest);

        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let then_branch = self.parse_block_statement();

        let else_branch = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition?),
            then_branch,
            else_branch,
        }))
    }

    /// `fn ( <params> ) { ... }`
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Comma-separated identifiers after `(`, ending on `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::from_token(self.cur_token.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::from_token(self.cur_token.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    /// `<function> ( <args> )`, registered as the infix handler for `(`.
    fn parse_call_expression(
        &mut self,
        function: Option<Expression>,
    ) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_call_arguments();

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function?),
            arguments: arguments?,
        }))
    }

    /// Comma-separated expressions after `(`, ending on `)`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(arguments);
        }

        let mut complete = true;
        self.next_token();
        match self.parse_expression(Precedence::Lowest) {
            Some(argument) => arguments.push(argument),
            None => complete = false,
        }

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            match self.parse_expression(Precedence::Lowest) {
                Some(argument) => arguments.push(argument),
                None => complete = false,
            }
        }

        self.expect_peek(TokenKind::RParen)?;
        complete.then_some(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;

    fn parse(source: &str) -> (Program, Vec<ParserError>) {
        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();
        (program, parser.into_errors())
    }

    fn parse_ok(source: &str) -> Program {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "unexpected errors for {source:?}: {errors:?}");
        program
    }

    /// Parses a single expression statement and returns its expression.
    fn parse_expr(source: &str) -> Expression {
        let program = parse_ok(source);
        assert_eq!(program.statements.len(), 1, "program: {program}");
        match program.statements.into_iter().next() {
            Some(Statement::Expression(stmt)) => stmt.expression,
            other => panic!("Expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn test_let_statements() {
        let program = parse_ok("let x = 5; let y = true; let foobar = y;");
        assert_eq!(program.statements.len(), 3);

        let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];
        for (statement, (name, value)) in program.statements.iter().zip(expected) {
            match statement {
                Statement::Let(stmt) => {
                    assert_eq!(stmt.token_literal(), "let");
                    assert_eq!(stmt.name.value, name);
                    assert_eq!(stmt.name.token_literal(), name);
                    assert_eq!(stmt.value.to_string(), value);
                }
                other => panic!("Expected let statement, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_return_statements() {
        let program = parse_ok("return 5; return 10; return add(1, 2);");
        assert_eq!(program.statements.len(), 3);
        for statement in &program.statements {
            assert!(matches!(statement, Statement::Return(_)));
            assert_eq!(statement.token_literal(), "return");
        }
        assert_eq!(program.to_string(), "return 5;return 10;return add(1, 2);");
    }

    #[test]
    fn test_semicolon_is_optional() {
        let program = parse_ok("let a = 1\nlet b = 2\na + b");
        assert_eq!(program.statements.len(), 3);
    }

    #[test]
    fn test_identifier_expression() {
        match parse_expr("foobar;") {
            Expression::Identifier(ident) => {
                assert_eq!(ident.value, "foobar");
                assert_eq!(ident.token_literal(), "foobar");
            }
            other => panic!("Expected identifier, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_literal_expression() {
        match parse_expr("5;") {
            Expression::Integer(int) => {
                assert_eq!(int.value, 5);
                assert_eq!(int.token_literal(), "5");
            }
            other => panic!("Expected integer literal, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_literal_bounds() {
        match parse_expr("9223372036854775807") {
            Expression::Integer(int) => assert_eq!(int.value, i64::MAX),
            other => panic!("Expected integer literal, got {other:?}"),
        }

        let (program, errors) = parse("9223372036854775808");
        assert!(program.is_empty());
        assert_eq!(
            errors,
            vec![ParserError::InvalidInteger {
                literal: "9223372036854775808".to_string()
            }]
        );
    }

    #[test]
    fn test_boolean_expression() {
        for (source, expected) in [("true;", true), ("false;", false)] {
            match parse_expr(source) {
                Expression::Boolean(boolean) => assert_eq!(boolean.value, expected),
                other => panic!("Expected boolean, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_prefix_expressions() {
        let tests = [
            ("!5;", "!", "5"),
            ("-15;", "-", "15"),
            ("!foobar;", "!", "foobar"),
            ("-foobar;", "-", "foobar"),
            ("!true;", "!", "true"),
            ("!false;", "!", "false"),
        ];

        for (source, operator, right) in tests {
            match parse_expr(source) {
                Expression::Prefix(prefix) => {
                    assert_eq!(prefix.operator, operator);
                    assert_eq!(prefix.right.to_string(), right);
                }
                other => panic!("Expected prefix expression, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let tests = [
            ("5 + 5;", "5", "+", "5"),
            ("5 - 5;", "5", "-", "5"),
            ("5 * 5;", "5", "*", "5"),
            ("5 / 5;", "5", "/", "5"),
            ("5 > 5;", "5", ">", "5"),
            ("5 < 5;", "5", "<", "5"),
            ("5 == 5;", "5", "==", "5"),
            ("5 != 5;", "5", "!=", "5"),
            ("a + b", "a", "+", "b"),
            ("true == true", "true", "==", "true"),
            ("true != false", "true", "!=", "false"),
        ];

        for (source, left, operator, right) in tests {
            match parse_expr(source) {
                Expression::Infix(infix) => {
                    assert_eq!(infix.left.to_string(), left);
                    assert_eq!(infix.operator, operator);
                    assert_eq!(infix.right.to_string(), right);
                }
                other => panic!("Expected infix expression, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_operator_precedence() {
        let tests = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c", "(a + (b * c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(a + b) * c", "((a + b) * c)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b, c) + d", "((a + add(b, c)) + d)"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
        ];

        for (source, expected) in tests {
            assert_eq!(parse_ok(source).to_string(), expected, "source: {source}");
        }
    }

    #[test]
    fn test_if_expression() {
        match parse_expr("if (x < y) { x }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.then_branch.statements.len(), 1);
                assert_eq!(if_expr.then_branch.to_string(), "x");
                assert!(if_expr.else_branch.is_none());
            }
            other => panic!("Expected if expression, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else_expression() {
        match parse_expr("if (x < y) { x } else { y }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.then_branch.to_string(), "x");
                let else_branch = if_expr.else_branch.expect("else branch");
                assert_eq!(else_branch.statements.len(), 1);
                assert_eq!(else_branch.to_string(), "y");
            }
            other => panic!("Expected if expression, got {other:?}"),
        }
    }

    #[test]
    fn test_function_literal() {
        match parse_expr("fn(x, y) { x + y; }") {
            Expression::Function(function) => {
                let names: Vec<_> =
                    function.parameters.iter().map(|p| p.value.as_str()).collect();
                assert_eq!(names, ["x", "y"]);
                assert_eq!(function.body.statements.len(), 1);
                assert_eq!(function.body.to_string(), "(x + y)");
                assert_eq!(function.to_string(), "fn(x, y) (x + y)");
            }
            other => panic!("Expected function literal, got {other:?}"),
        }
    }

    #[test]
    fn test_function_parameters() {
        let tests: [(&str, &[&str]); 3] = [
            ("fn() {};", &[]),
            ("fn(x) {};", &["x"]),
            ("fn(x, y, z) {};", &["x", "y", "z"]),
        ];

        for (source, expected) in tests {
            match parse_expr(source) {
                Expression::Function(function) => {
                    let names: Vec<_> = function
                        .parameters
                        .iter()
                        .map(|p| p.value.as_str())
                        .collect();
                    assert_eq!(names, expected);
                }
                other => panic!("Expected function literal, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_call_expression() {
        match parse_expr("add(1, 2 * 3, 4 + 5);") {
            Expression::Call(call) => {
                assert_eq!(call.function.to_string(), "add");
                let args: Vec<_> = call.arguments.iter().map(ToString::to_string).collect();
                assert_eq!(args, ["1", "(2 * 3)", "(4 + 5)"]);
            }
            other => panic!("Expected call expression, got {other:?}"),
        }
    }

    #[test]
    fn test_call_on_function_literal() {
        let program = parse_ok("fn(x) { x }(5)");
        assert_eq!(program.to_string(), "fn(x) x(5)");
    }

    #[test]
    fn test_let_missing_assign() {
        let (program, errors) = parse("let x 5;");
        assert_eq!(
            errors,
            vec![ParserError::UnexpectedToken {
                expected: TokenKind::Assign,
                found: Token::new(TokenKind::Int, "5"),
            }]
        );
        // The dangling `5` is recovered as an expression statement.
        assert_eq!(program.to_string(), "5");
    }

    #[test]
    fn test_let_missing_identifier() {
        let (_, errors) = parse("let = 10;");
        let messages: Vec<_> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "expected next token to be `IDENT`, got = `=` instead",
                "no prefix parse function for = found",
            ]
        );
    }

    #[test]
    fn test_errors_accumulate_and_parsing_continues() {
        let (program, errors) = parse("let x 5; let = 10; let y = 838383;");
        assert_eq!(errors.len(), 3);
        assert!(
            program
                .statements
                .iter()
                .any(|s| s.to_string() == "let y = 838383;")
        );
    }

    #[test]
    fn test_no_prefix_parse_function() {
        let (program, errors) = parse(")");
        assert!(program.is_empty());
        assert_eq!(
            errors,
            vec![ParserError::NoPrefixParser {
                kind: TokenKind::RParen
            }]
        );
    }

    #[test]
    fn test_missing_closing_paren() {
        let (program, errors) = parse("(1 + 2");
        assert!(program.is_empty());
        assert_eq!(
            errors,
            vec![ParserError::UnexpectedToken {
                expected: TokenKind::RParen,
                found: Token::eof(),
            }]
        );
    }

    #[test]
    fn test_illegal_token_is_reported() {
        let (_, errors) = parse("1.5");
        assert_eq!(
            errors,
            vec![ParserError::NoPrefixParser {
                kind: TokenKind::Illegal
            }]
        );
    }

    #[test]
    fn test_function_parameter_must_be_identifier() {
        let (_, errors) = parse("fn(1) { 1 }");
        assert_eq!(
            errors.first(),
            Some(&ParserError::UnexpectedToken {
                expected: TokenKind::Ident,
                found: Token::new(TokenKind::Int, "1"),
            })
        );
    }

    #[test]
    fn test_unterminated_block_reaches_end_of_input() {
        let program = parse_ok("if (x) { y");
        assert_eq!(program.to_string(), "ifx y");
    }

    #[test]
    fn test_error_messages_are_rendered() {
        let mut parser = Parser::new(Lexer::new("let x 5;"));
        let _ = parser.parse_program();
        assert!(parser.has_errors());
        assert_eq!(
            parser.error_messages(),
            ["expected next token to be `=`, got INT `5` instead"]
        );
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let depth = MAX_NESTING_DEPTH - 1;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_ok(&source).to_string(), "1");
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let depth = MAX_NESTING_DEPTH;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let (program, errors) = parse(&source);
        assert!(program.is_empty());
        assert_eq!(
            errors,
            [ParserError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH
            }]
        );
    }

    #[test]
    fn test_very_deep_nesting_does_not_overflow() {
        let source = format!("{}1{}; 2", "(".repeat(200_000), ")".repeat(200_000));
        let (program, errors) = parse(&source);
        assert!(program.is_empty());
        assert_eq!(errors.len(), 1);

        let (_, errors) = parse(&format!("{}1", "-".repeat(100_000)));
        assert_eq!(
            errors,
            [ParserError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH
            }]
        );
    }

    #[test]
    fn test_nested_blocks_count_towards_the_limit() {
        let source = "if (x) { ".repeat(MAX_NESTING_DEPTH) + "1";
        let (_, errors) = parse(&source);
        assert_eq!(
            errors.last(),
            Some(&ParserError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH
            })
        );
    }
}
