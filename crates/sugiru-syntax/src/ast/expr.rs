//! Expression nodes in the Sugiru AST.
//!
//! Expressions produce a value when evaluated. Compound expressions box their
//! operands so the tree stays a plain owned value.

use super::Node;
use super::stmt::BlockStatement;
use crate::token::Token;
use std::fmt;

/// An expression in the Sugiru language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a bound name: `x`
    Identifier(Identifier),

    /// Integer literal: `5`
    Integer(IntegerLiteral),

    /// Boolean literal: `true`, `false`
    Boolean(BooleanLiteral),

    /// Prefix operator: `-x`, `!ok`
    Prefix(PrefixExpression),

    /// Binary operator: `a + b`, `x == y`
    Infix(InfixExpression),

    /// Conditional: `if (c) { a } else { b }`
    If(IfExpression),

    /// Function literal: `fn(x, y) { x + y }`
    Function(FunctionLiteral),

    /// Call: `add(1, 2)`
    Call(CallExpression),
}

/// A name used as an expression, and the parameter names of functions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The `IDENT` token
    pub token: Token,
    /// The name itself
    pub value: String,
}

impl Identifier {
    /// Creates an identifier from its token, taking the name from the literal.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

/// A decimal integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// The `INT` token
    pub token: Token,
    /// The parsed value
    pub value: i64,
}

/// A boolean literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    /// The `TRUE` or `FALSE` token
    pub token: Token,
    /// The literal value
    pub value: bool,
}

/// A prefix operator applied to one operand.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    /// The operator token (`!` or `-`)
    pub token: Token,
    /// The operator text
    pub operator: String,
    /// The operand
    pub right: Box<Expression>,
}

/// A binary operator applied to two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    /// The operator token
    pub token: Token,
    /// The operator text
    pub operator: String,
    /// Left operand
    pub left: Box<Expression>,
    /// Right operand
    pub right: Box<Expression>,
}

/// `if (condition) { then } else { else }` with an optional else block.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    /// The `if` token
    pub token: Token,
    /// Condition
    pub condition: Box<Expression>,
    /// Block evaluated when the condition holds
    pub then_branch: BlockStatement,
    /// Optional block evaluated otherwise
    pub else_branch: Option<BlockStatement>,
}

/// `fn(parameters) { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// The `fn` token
    pub token: Token,
    /// Parameter names in order
    pub parameters: Vec<Identifier>,
    /// Function body
    pub body: BlockStatement,
}

/// `function(arguments)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The `(` token
    pub token: Token,
    /// The callee: an identifier or any expression yielding a function
    pub function: Box<Expression>,
    /// Arguments in order
    pub arguments: Vec<Expression>,
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(node) => node.token_literal(),
            Self::Integer(node) => node.token_literal(),
            Self::Boolean(node) => node.token_literal(),
            Self::Prefix(node) => node.token_literal(),
            Self::Infix(node) => node.token_literal(),
            Self::If(node) => node.token_literal(),
            Self::Function(node) => node.token_literal(),
            Self::Call(node) => node.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(node) => fmt::Display::fmt(node, f),
            Self::Integer(node) => fmt::Display::fmt(node, f),
            Self::Boolean(node) => fmt::Display::fmt(node, f),
            Self::Prefix(node) => fmt::Display::fmt(node, f),
            Self::Infix(node) => fmt::Display::fmt(node, f),
            Self::If(node) => fmt::Display::fmt(node, f),
            Self::Function(node) => fmt::Display::fmt(node, f),
            Self::Call(node) => fmt::Display::fmt(node, f),
        }
    }
}

macro_rules! impl_token_literal {
    ($($node:ty),* $(,)?) => {
        $(
            impl Node for $node {
                fn token_literal(&self) -> &str {
                    &self.token.literal
                }
            }
        )*
    };
}

impl_token_literal!(
    Identifier,
    IntegerLiteral,
    BooleanLiteral,
    PrefixExpression,
    InfixExpression,
    IfExpression,
    FunctionLiteral,
    CallExpression,
);

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token.literal)
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.then_branch)?;
        if let Some(else_branch) = &self.else_branch {
            write!(f, "else {else_branch}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.token.literal)?;
        write_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_separated(f, &self.arguments)?;
        f.write_str(")")
    }
}

/// Writes `items` separated by `", "`.
fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn ident(name: &str) -> Identifier {
        Identifier::from_token(Token::new(TokenKind::Ident, name))
    }

    fn int(value: i64) -> Expression {
        Expression::Integer(IntegerLiteral {
            token: Token::new(TokenKind::Int, value.to_string()),
            value,
        })
    }

    #[test]
    fn test_prefix_and_infix_display() {
        let negated = Expression::Prefix(PrefixExpression {
            token: Token::new(TokenKind::Minus, "-"),
            operator: "-".to_string(),
            right: Box::new(Expression::Identifier(ident("a"))),
        });
        let product = Expression::Infix(InfixExpression {
            token: Token::new(TokenKind::Asterisk, "*"),
            operator: "*".to_string(),
            left: Box::new(negated),
            right: Box::new(int(2)),
        });

        assert_eq!(product.to_string(), "((-a) * 2)");
        assert_eq!(product.token_literal(), "*");
    }

    #[test]
    fn test_call_display() {
        let call = Expression::Call(CallExpression {
            token: Token::new(TokenKind::LParen, "("),
            function: Box::new(Expression::Identifier(ident("add"))),
            arguments: vec![int(1), Expression::Identifier(ident("x"))],
        });

        assert_eq!(call.to_string(), "add(1, x)");
    }

    #[test]
    fn test_identifier_from_token() {
        let id = ident("counter");
        assert_eq!(id.value, "counter");
        assert_eq!(id.token_literal(), "counter");
    }
}
