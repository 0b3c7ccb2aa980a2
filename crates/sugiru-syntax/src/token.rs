//! Token types and lexical tokens for the Sugiru language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was scanned
//! from. Tokens are plain values: two tokens are the same token when their kind
//! and literal are equal.
//!
//! # Examples
//!
//! ```
//! use sugiru_syntax::token::{Token, TokenKind};
//!
//! let token = Token::new(TokenKind::Let, "let");
//! assert_eq!(token.to_string(), "{Type:LET Literal:let}");
//! assert_eq!(TokenKind::lookup_ident("return"), TokenKind::Return);
//! ```

use std::fmt;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Special =====
    /// A byte (or character) the lexer does not recognise
    Illegal,

    /// End of input
    Eof,

    // ===== Identifiers and literals =====
    /// Identifier: `x`, `add`, `foo_bar`
    Ident,

    /// Integer literal: `5`, `1024`
    Int,

    // ===== Operators =====
    /// Assignment: `=`
    Assign,

    /// Addition: `+`
    Plus,

    /// Subtraction or negation: `-`
    Minus,

    /// Logical not: `!`
    Bang,

    /// Multiplication: `*`
    Asterisk,

    /// Division: `/`
    Slash,

    /// Less than: `<`
    Lt,

    /// Greater than: `>`
    Gt,

    /// Equality: `==`
    Eq,

    /// Inequality: `!=`
    NotEq,

    // ===== Delimiters =====
    /// Comma: `,`
    Comma,

    /// Semicolon: `;`
    Semicolon,

    /// Left parenthesis: `(`
    LParen,

    /// Right parenthesis: `)`
    RParen,

    /// Left brace: `{`
    LBrace,

    /// Right brace: `}`
    RBrace,

    // ===== Keywords =====
    /// Function literal: `fn`
    Function,

    /// Binding: `let`
    Let,

    /// Boolean literal `true`
    True,

    /// Boolean literal `false`
    False,

    /// Conditional: `if`
    If,

    /// Alternative branch: `else`
    Else,

    /// Return statement: `return`
    Return,
}

impl TokenKind {
    /// Resolves an identifier against the keyword table.
    ///
    /// Anything that is not one of `fn let true false if else return` is an
    /// [`TokenKind::Ident`].
    ///
    /// ```
    /// use sugiru_syntax::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::lookup_ident("fn"), TokenKind::Function);
    /// assert_eq!(TokenKind::lookup_ident("fnord"), TokenKind::Ident);
    /// ```
    #[must_use]
    pub fn lookup_ident(ident: &str) -> Self {
        match ident {
            "fn" => Self::Function,
            "let" => Self::Let,
            "true" => Self::True,
            "false" => Self::False,
            "if" => Self::If,
            "else" => Self::Else,
            "return" => Self::Return,
            _ => Self::Ident,
        }
    }

    /// Returns `true` if this kind is a reserved keyword.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Let
                | Self::True
                | Self::False
                | Self::If
                | Self::Else
                | Self::Return
        )
    }

    /// Returns `true` if this kind is a prefix or infix operator.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::Plus
                | Self::Minus
                | Self::Bang
                | Self::Asterisk
                | Self::Slash
                | Self::Lt
                | Self::Gt
                | Self::Eq
                | Self::NotEq
        )
    }

    /// Returns the name used for this kind in diagnostics and token dumps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexical token: its kind and the literal text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,

    /// The raw source text of the token (empty for [`TokenKind::Eof`])
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::eof()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}
