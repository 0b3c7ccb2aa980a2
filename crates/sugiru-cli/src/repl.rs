//! The read-eval-print loop.
//!
//! Each line is lexed and parsed on its own. Depending on the [`Mode`] the
//! loop prints the tokens, the parsed program or the evaluated value. Parse
//! errors are printed one per line, indented by a tab, and the line is
//! skipped. One [`Interpreter`] serves the whole session, so bindings made on
//! one line are visible on the next.

use crate::config::{Config, Mode};
use std::io::{self, BufRead, Write};
use sugiru_interpreter::Interpreter;
use sugiru_log::{debug, info};
use sugiru_syntax::{Lexer, Parser, ParserError, TokenKind};

/// Printed before each line is read when prompting is enabled.
pub const PROMPT: &str = ">> ";

/// A REPL session.
pub struct Repl {
    mode: Mode,
    prompt: bool,
    interpreter: Interpreter,
}

impl Repl {
    /// Creates a session from the resolved configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            mode: config.mode,
            prompt: config.prompt,
            interpreter: Interpreter::new(),
        }
    }

    /// Runs until `input` is exhausted.
    ///
    /// Lines need not be valid UTF-8: bytes that are not become U+FFFD, which
    /// the lexer reports as an illegal token like any other stray character.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        if self.prompt {
            writeln!(output, "{}", banner())?;
        }

        let mut buf = Vec::new();
        loop {
            if self.prompt {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            self.eval_line(&line, output)?;
        }

        if self.prompt {
            writeln!(output)?;
        }
        info!("end of input");
        Ok(())
    }

    /// Handles one line of source according to the session mode.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing `output`.
    pub fn eval_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        debug!("line: {:?}", line);
        match self.mode {
            Mode::Tokens => {
                for token in Lexer::new(line).take_while(|t| !t.is(TokenKind::Eof)) {
                    writeln!(output, "{token}")?;
                }
            }
            Mode::Ast => {
                let mut parser = Parser::new(Lexer::new(line));
                let program = parser.parse_program();
                if parser.has_errors() {
                    print_parser_errors(output, parser.errors())?;
                } else if !program.is_empty() {
                    writeln!(output, "{program}")?;
                }
            }
            Mode::Eval => {
                let mut parser = Parser::new(Lexer::new(line));
                let program = parser.parse_program();
                if parser.has_errors() {
                    return print_parser_errors(output, parser.errors());
                }
                match self.interpreter.eval_program(&program) {
                    Ok(Some(value)) => writeln!(output, "{value}")?,
                    Ok(None) => {}
                    Err(error) => writeln!(output, "runtime error: {error}")?,
                }
            }
        }
        Ok(())
    }
}

/// Returns the greeting printed once at the start of an interactive session.
fn banner() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());
    format!("[ SUGIRU REPL MODE : USER {{{user}}} ]")
}

/// Drops a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParserError]) -> io::Result<()> {
    debug!("{} parse error(s)", errors.len());
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
