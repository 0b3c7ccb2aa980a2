//! Lexical analysis (tokenization) for the Sugiru language.
//!
//! The lexer walks a byte cursor over the source and produces tokens on
//! demand. It never fails: a byte it does not recognise becomes an
//! [`TokenKind::Illegal`] token and scanning carries on, leaving the parser to
//! report the problem.
//!
//! # Examples
//!
//! ```
//! use sugiru_syntax::lexer::Lexer;
//! use sugiru_syntax::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let x = 42;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//!
//! let tokens = Lexer::new("let x = 42;").lex();
//! assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
//! ```

use crate::token::{Token, TokenKind};
use sugiru_log::trace;

/// Pull-based lexical analyzer over a complete source string.
///
/// A lexer cannot be rewound; to scan the same source again, build a new one.
#[derive(Debug, Clone)]
pub struct Lexer<'input> {
    /// The source code being tokenized
    input: &'input str,

    /// Byte offset of the next unread byte
    position: usize,

    /// Set once the end-of-input token has been yielded by the iterator
    exhausted: bool,
}

impl<'input> Lexer<'input> {
    /// Creates a new lexer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            position: 0,
            exhausted: false,
        }
    }

    /// Scans and returns the next token.
    ///
    /// Once the input is exhausted every further call returns an
    /// end-of-input token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(byte) = self.peek() else {
            return Token::eof();
        };

        let token = match byte {
            b'=' => self.one_or_two(TokenKind::Assign, b'=', TokenKind::Eq),
            b'!' => self.one_or_two(TokenKind::Bang, b'=', TokenKind::NotEq),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b if is_letter(b) => self.read_identifier(),
            b if b.is_ascii_digit() => self.read_number(),
            _ => self.read_illegal(),
        };

        trace!("scanned {}", token);
        token
    }

    /// Scans the whole input, returning every token including the final
    /// end-of-input token.
    #[must_use]
    pub fn lex(self) -> Vec<Token> {
        self.collect()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position + 1).copied()
    }

    /// Skips spaces, tabs, carriage returns and newlines.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.position += 1;
        }
    }

    /// Consumes `len` bytes and wraps them in a token of `kind`.
    fn take(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.position;
        self.position += len;
        Token::new(kind, &self.input[start..self.position])
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        self.take(kind, 1)
    }

    /// Scans `kind`, or `paired` when the following byte is `second`.
    fn one_or_two(
        &mut self,
        kind: TokenKind,
        second: u8,
        paired: TokenKind,
    ) -> Token {
        if self.peek_next() == Some(second) {
            self.take(paired, 2)
        } else {
            self.take(kind, 1)
        }
    }

    /// Reads a maximal run of letters and underscores, then resolves keywords.
    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while self.peek().is_some_and(is_letter) {
            self.position += 1;
        }

        let text = &self.input[start..self.position];
        Token::new(TokenKind::lookup_ident(text), text)
    }

    /// Reads a maximal run of decimal digits. Fractions are not part of the
    /// language, so `1.5` stops before the dot.
    fn read_number(&mut self) -> Token {
        let start = self.position;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.position += 1;
        }

        Token::new(TokenKind::Int, &self.input[start..self.position])
    }

    /// Wraps the unrecognised character under the cursor in an illegal token.
    fn read_illegal(&mut self) -> Token {
        let len = self.input[self.position..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.take(TokenKind::Illegal, len)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to and including the end-of-input token.
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.exhausted = true;
        }
        Some(token)
    }
}

const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}
