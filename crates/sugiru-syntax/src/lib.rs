//! Sugiru Syntax: Lexer, Parser, and AST
//!
//! This crate provides the language frontend for Sugiru, including:
//! - Lexical analysis (tokenization)
//! - Pratt parsing with error recovery
//! - AST node definitions with a canonical printed form
//!
//! # Modules
//!
//! - [`token`] - Token kinds and the keyword table
//! - [`lexer`] - Pull-based tokenizer
//! - [`ast`] - Program, statement and expression nodes
//! - [`precedence`] - Operator binding strengths
//! - [`parser`] - Statement and expression parser
//! - [`error`] - Parser diagnostics
//!
//! # Examples
//!
//! ## Tokenizing
//!
//! ```
//! use sugiru_syntax::{Lexer, TokenKind};
//!
//! let kinds: Vec<_> = Lexer::new("x != 10").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Ident, TokenKind::NotEq, TokenKind::Int, TokenKind::Eof]
//! );
//! ```
//!
//! ## Parsing
//!
//! ```
//! let (program, errors) = sugiru_syntax::parse("let add = fn(a, b) { a + b };");
//!
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "let add = fn(a, b) (a + b);");
//! ```

#![warn(missing_docs)]

// Public modules
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod token;

// Re-exports for convenience
pub use ast::{Node, Program};
pub use error::ParserError;
pub use lexer::Lexer;
pub use parser::Parser;
pub use precedence::Precedence;
pub use token::{Token, TokenKind};

/// Parses `source` into a program, returning it with every diagnostic found.
///
/// The program is always produced; statements that failed to parse are
/// missing from it.
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParserError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Parses `source`, failing with the diagnostics if there were any.
///
/// # Errors
///
/// Returns every [`ParserError`] recorded when the source is not well formed.
pub fn parse_strict(source: &str) -> Result<Program, Vec<ParserError>> {
    let (program, errors) = parse(source);
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}
