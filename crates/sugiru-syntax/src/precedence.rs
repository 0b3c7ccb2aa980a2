//! Binding strength of operators.

use crate::token::TokenKind;

/// Operator precedence levels, weakest first.
///
/// Grouping parentheses and call parentheses both sit at [`Precedence::Call`],
/// so `f(x)` binds tighter than any operator around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Start of an expression; binds nothing
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Returns the precedence a token has in infix position.
    ///
    /// Tokens that are not infix operators get [`Precedence::Lowest`], which
    /// ends any expression they follow.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}
