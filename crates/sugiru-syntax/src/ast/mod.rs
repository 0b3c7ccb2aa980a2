//! Abstract Syntax Tree (AST) for the Sugiru language.
//!
//! The tree is strict: every node owns its children and there are no back
//! references. Each node keeps the token it was built from so diagnostics can
//! quote the source text through [`Node::token_literal`].
//!
//! `Display` renders nodes in a fully parenthesised form, which is how tests
//! check operator precedence:
//!
//! ```
//! use sugiru_syntax::{Lexer, Parser};
//!
//! let mut parser = Parser::new(Lexer::new("-a * b + c"));
//! let program = parser.parse_program();
//! assert_eq!(program.to_string(), "(((-a) * b) + c)");
//! ```
//!
//! # Modules
//!
//! - [`expr`] - Expression nodes (literals, operators, `if`, functions, calls)
//! - [`stmt`] - Statement nodes (`let`, `return`, expression statements, blocks)

pub mod expr;
pub mod stmt;

pub use expr::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier,
    IfExpression, InfixExpression, IntegerLiteral, PrefixExpression,
};
pub use stmt::{
    BlockStatement, ExpressionStatement, LetStatement, ReturnStatement,
    Statement,
};

use std::fmt;

/// Behaviour shared by every AST node.
pub trait Node: fmt::Display {
    /// Returns the literal text of the token this node was built from.
    fn token_literal(&self) -> &str;
}

/// Root of a parsed source text: an ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the program has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
