//! Runtime values.
//!
//! Values are immutable once built. The two booleans and null exist as
//! constants ([`TRUE`], [`FALSE`], [`NULL`]) and the evaluator only ever
//! produces booleans through [`Value::from_bool`], so every boolean result is
//! one of the two canonical values.
//!
//! # Examples
//!
//! ```
//! use sugiru_interpreter::value::{Value, FALSE, TRUE};
//!
//! assert_eq!(Value::from_bool(3 > 2), TRUE);
//! assert_eq!(Value::Integer(15).to_string(), "15");
//! assert_eq!(FALSE.type_name(), "BOOLEAN");
//! ```

use crate::environment::Env;
use std::fmt;
use std::rc::Rc;
use sugiru_syntax::ast::{BlockStatement, Identifier};

/// The canonical `true`.
pub const TRUE: Value = Value::Boolean(true);

/// The canonical `false`.
pub const FALSE: Value = Value::Boolean(false);

/// The canonical null value.
pub const NULL: Value = Value::Null;

/// A value produced by evaluation.
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),

    /// Boolean; always equal to [`TRUE`] or [`FALSE`]
    Boolean(bool),

    /// Absence of a meaningful value
    Null,

    /// Closure over the environment it was created in
    Function(Rc<Function>),
}

impl Value {
    /// Maps a host boolean onto the canonical boolean values.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }

    /// Returns the name of this value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Function(_) => "FUNCTION",
        }
    }

    /// Returns `false` for [`FALSE`] and [`NULL`], `true` for everything else.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::from_bool(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Null => f.write_str("null"),
            Value::Function(function) => fmt::Display::fmt(function, f),
        }
    }
}

/// A function value: parameters and body from the literal, plus the
/// environment the literal was evaluated in.
pub struct Function {
    /// Parameter names in order
    pub parameters: Vec<Identifier>,
    /// Function body
    pub body: BlockStatement,
    /// Captured defining environment
    pub env: Env,
}

// The captured environment can hold the function itself, so it is left out.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ") {}", self.body)
    }
}
