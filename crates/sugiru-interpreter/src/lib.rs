//! Sugiru Interpreter: Direct AST Execution
//!
//! This crate provides a tree-walking interpreter for Sugiru, including:
//! - Runtime values with canonical boolean and null constants
//! - Lexically scoped environments and closures
//! - Evaluation of statements, expressions and function calls
//!
//! # Modules
//!
//! - [`value`] - Runtime values and function objects
//! - [`environment`] - Scoped name bindings
//! - [`evaluator`] - The evaluator and [`Interpreter`] session
//! - [`error`] - Runtime errors
//!
//! # Examples
//!
//! ```
//! use sugiru_interpreter::{evaluate, Value};
//!
//! let (program, errors) = sugiru_syntax::parse("5 + 5 * 2");
//! assert!(errors.is_empty());
//! assert_eq!(evaluate(&program), Ok(Some(Value::Integer(15))));
//! ```

#![warn(missing_docs)]

// Public modules
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod value;

// Re-exports for convenience
pub use environment::{Env, WeakEnv};
pub use error::{EvalResult, RuntimeError};
pub use evaluator::{DEFAULT_MAX_DEPTH, Interpreter, evaluate};
pub use value::{FALSE, Function, NULL, TRUE, Value};
