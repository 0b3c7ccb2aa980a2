//! Parser diagnostics.
//!
//! The lexer never fails, so the only syntax errors are the ones the parser
//! records while it keeps going. They are collected, not returned: a program
//! is always produced and the caller decides whether to show the errors.

use crate::token::{Token, TokenKind};
use std::fmt;

/// A problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    /// The token after the current one was not the one the grammar requires.
    ///
    /// ```text
    /// let x 5;
    ///       ^
    /// expected next token to be `=`, got INT `5` instead
    /// ```
    UnexpectedToken {
        /// The token kind the grammar requires
        expected: TokenKind,

        /// The token actually found
        found: Token,
    },

    /// No expression can start with this kind of token.
    ///
    /// ```text
    /// let x = );
    ///         ^
    /// no prefix parse function for ) found
    /// ```
    NoPrefixParser {
        /// The kind of the offending token
        kind: TokenKind,
    },

    /// An integer literal does not fit in a signed 64-bit integer.
    InvalidInteger {
        /// The literal text
        literal: String,
    },

    /// Expressions are nested more than `limit` levels deep. The rest of the
    /// input is skipped.
    NestingTooDeep {
        /// The deepest nesting the parser accepts
        limit: usize,
    },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be `{expected}`, got {}", found.kind)?;
                if !found.literal.is_empty() {
                    write!(f, " `{}`", found.literal)?;
                }
                write!(f, " instead")
            }
            Self::NoPrefixParser { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            }
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "expression nested too deeply (more than {limit} levels)")
            }
        }
    }
}

impl std::error::Error for ParserError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_display() {
        let err = ParserError::UnexpectedToken {
            expected: TokenKind::Assign,
            found: Token::new(TokenKind::Int, "5"),
        };
        assert_eq!(
            err.to_string(),
            "expected next token to be `=`, got INT `5` instead"
        );
    }

    #[test]
    fn test_unexpected_eof_display() {
        let err = ParserError::UnexpectedToken {
            expected: TokenKind::RParen,
            found: Token::eof(),
        };
        assert_eq!(err.to_string(), "expected next token to be `)`, got EOF instead");
    }

    #[test]
    fn test_no_prefix_and_invalid_integer_display() {
        let err = ParserError::NoPrefixParser {
            kind: TokenKind::RParen,
        };
        assert_eq!(err.to_string(), "no prefix parse function for ) found");

        let err = ParserError::InvalidInteger {
            literal: "99999999999999999999".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not parse \"99999999999999999999\" as integer"
        );

        let err = ParserError::NestingTooDeep { limit: 256 };
        assert_eq!(
            err.to_string(),
            "expression nested too deeply (more than 256 levels)"
        );
    }
}
