//! Statement nodes in the Sugiru AST.
//!
//! Statements appear in a sequence (a program or a block). They do not
//! produce a value of their own, except that an expression statement carries
//! the value of its expression.

use super::Node;
use super::expr::{Expression, Identifier};
use crate::token::Token;
use std::fmt;

/// A statement in the Sugiru language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Binding: `let x = 5;`
    Let(LetStatement),

    /// Return: `return x;`
    Return(ReturnStatement),

    /// Expression at statement level: `x + 1;`
    Expression(ExpressionStatement),
}

/// `let name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` token
    pub token: Token,
    /// Bound name
    pub name: Identifier,
    /// Bound value
    pub value: Expression,
}

/// `return value;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` token
    pub token: Token,
    /// The returned expression
    pub return_value: Expression,
}

/// An expression used as a statement; the trailing `;` is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    /// The expression
    pub expression: Expression,
}

/// `{ statements }` as used by `if` branches and function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The `{` token
    pub token: Token,
    /// Statements in source order
    pub statements: Vec<Statement>,
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Self::Let(node) => &node.token.literal,
            Self::Return(node) => &node.token.literal,
            Self::Expression(node) => &node.token.literal,
        }
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(node) => {
                write!(f, "{} {} = {};", node.token.literal, node.name, node.value)
            }
            Self::Return(node) => {
                write!(f, "{} {};", node.token.literal, node.return_value)
            }
            Self::Expression(node) => write!(f, "{}", node.expression),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
