//! Error types for the Sugiru evaluator.

use std::fmt;

/// Errors that can occur while evaluating a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Integer division with a zero divisor.
    DivisionByZero,

    /// A name was used that is not bound in any enclosing scope.
    UnknownIdentifier(String),

    /// A call was applied to a value that is not a function.
    NotAFunction(&'static str),

    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// Evaluation nested deeper than the interpreter allows, usually through
    /// unbounded recursion.
    StackOverflow {
        /// The nesting limit that was exceeded.
        limit: usize,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::UnknownIdentifier(name) => {
                write!(f, "identifier not found: {name}")
            }
            RuntimeError::NotAFunction(type_name) => {
                write!(f, "not a function: {type_name}")
            }
            RuntimeError::ArityMismatch { expected, found } => {
                write!(
                    f,
                    "wrong number of arguments: expected {expected}, got {found}"
                )
            }
            RuntimeError::StackOverflow { limit } => {
                write!(f, "stack overflow: evaluation nested deeper than {limit} levels")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;
