//! Tree-walking evaluation of Sugiru programs.
//!
//! Evaluation recurses directly over the AST. Statement sequences take the
//! value of their last statement. `return` unwinds through blocks and `if`
//! expressions until it reaches the enclosing call or the program.
//!
//! Integer `<`, `>`, `==` and `!=` produce booleans rather than `null`, and
//! `==`/`!=` also compare two booleans; without them an `if` condition could
//! never be computed. Other operator and operand combinations yield `null`.

use crate::environment::{Env, WeakEnv};
use crate::error::{EvalResult, RuntimeError};
use crate::value::{FALSE, Function, NULL, TRUE, Value};
use std::rc::Rc;
use sugiru_log::{debug, trace};
use sugiru_syntax::ast::{
    BlockStatement, Expression, IfExpression, Program, Statement,
};

/// How deeply expressions and calls may nest before evaluation fails with
/// [`RuntimeError::StackOverflow`].
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Why evaluation of a statement or expression stopped early.
enum Unwind {
    /// A `return` statement produced this value.
    Return(Value),
    /// Evaluation failed.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Unwind::Error(error)
    }
}

type Flow<T> = Result<T, Unwind>;

/// Evaluator holding a global environment.
///
/// Bindings made by one call to [`Interpreter::eval_program`] are visible to
/// the next, which is what a REPL session needs.
///
/// Dropping the interpreter clears the global scope and every call scope it
/// created. Function values that outlive it no longer see the bindings they
/// captured.
///
/// # Examples
///
/// ```
/// use sugiru_interpreter::{Interpreter, Value};
///
/// let mut interpreter = Interpreter::new();
/// let (program, _) = sugiru_syntax::parse("let double = fn(x) { x * 2 };");
/// assert_eq!(interpreter.eval_program(&program), Ok(None));
///
/// let (program, _) = sugiru_syntax::parse("double(21)");
/// assert_eq!(interpreter.eval_program(&program), Ok(Some(Value::Integer(42))));
/// ```
#[derive(Debug)]
pub struct Interpreter {
    /// Global scope
    env: Env,
    /// Call scopes created so far; dead entries are pruned as the list grows
    scopes: Vec<WeakEnv>,
    /// Expressions currently being evaluated
    depth: usize,
    max_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        for scope in self.scopes.drain(..).filter_map(|scope| scope.upgrade()) {
            scope.clear();
        }
        self.env.clear();
    }
}

impl Interpreter {
    /// Creates an interpreter with an empty global environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter that fails with
    /// [`RuntimeError::StackOverflow`] past `max_depth` nested expressions.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            env: Env::new(),
            scopes: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    /// Returns the global environment.
    #[must_use]
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluates a program and returns the value of its last statement.
    ///
    /// Returns `Ok(None)` when the program is empty or its last statement is
    /// a `let`. A top-level `return` stops the program with its value.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuntimeError`] raised. Bindings made before the
    /// error stay in the global environment.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        let env = self.env.clone();
        match self.eval_statements(&program.statements, &env) {
            Ok(value) => Ok(value),
            Err(Unwind::Return(value)) => Ok(Some(value)),
            Err(Unwind::Error(error)) => {
                debug!("runtime error: {}", error);
                Err(error)
            }
        }
    }

    fn eval_statements(&mut self, statements: &[Statement], env: &Env) -> Flow<Option<Value>> {
        let mut result = None;
        for statement in statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    fn eval_statement(&mut self, statement: &Statement, env: &Env) -> Flow<Option<Value>> {
        match statement {
            Statement::Let(stmt) => {
                let value = self.eval_expression(&stmt.value, env)?;
                trace!("bind {} = {}", stmt.name, value);
                env.set(stmt.name.value.as_str(), value);
                Ok(None)
            }
            Statement::Return(stmt) => {
                let value = self.eval_expression(&stmt.return_value, env)?;
                Err(Unwind::Return(value))
            }
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression, env).map(Some),
        }
    }

    /// Evaluates a block in the current scope. An empty block yields [`NULL`].
    fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> Flow<Value> {
        Ok(self.eval_statements(&block.statements, env)?.unwrap_or(NULL))
    }

    fn eval_expression(&mut self, expression: &Expression, env: &Env) -> Flow<Value> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::StackOverflow {
                limit: self.max_depth,
            }
            .into());
        }

        self.depth += 1;
        let value = self.eval_expression_at_depth(expression, env);
        self.depth -= 1;
        value
    }

    fn eval_expression_at_depth(&mut self, expression: &Expression, env: &Env) -> Flow<Value> {
        trace!("eval {}", expression);
        match expression {
            Expression::Identifier(ident) => env
                .get(&ident.value)
                .ok_or_else(|| RuntimeError::UnknownIdentifier(ident.value.clone()).into()),
            Expression::Integer(int) => Ok(Value::Integer(int.value)),
            Expression::Boolean(boolean) => Ok(Value::from_bool(boolean.value)),
            Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right, env)?;
                Ok(eval_prefix(&prefix.operator, &right))
            }
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left, env)?;
                let right = self.eval_expression(&infix.right, env)?;
                Ok(eval_infix(&infix.operator, &left, &right)?)
            }
            Expression::If(if_expr) => self.eval_if(if_expr, env),
            Expression::Function(literal) => Ok(Value::Function(Rc::new(Function {
                parameters: literal.parameters.clone(),
                body: literal.body.clone(),
                env: env.clone(),
            }))),
            Expression::Call(call) => {
                let callee = self.eval_expression(&call.function, env)?;
                let mut arguments = Vec::with_capacity(call.arguments.len());
                for argument in &call.arguments {
                    arguments.push(self.eval_expression(argument, env)?);
                }
                self.apply_function(&callee, arguments)
            }
        }
    }

    fn eval_if(&mut self, if_expr: &IfExpression, env: &Env) -> Flow<Value> {
        let condition = self.eval_expression(&if_expr.condition, env)?;
        if condition.is_truthy() {
            self.eval_block(&if_expr.then_branch, env)
        } else if let Some(else_branch) = &if_expr.else_branch {
            self.eval_block(else_branch, env)
        } else {
            Ok(NULL)
        }
    }

    fn apply_function(&mut self, callee: &Value, arguments: Vec<Value>) -> Flow<Value> {
        let Value::Function(function) = callee else {
            return Err(RuntimeError::NotAFunction(callee.type_name()).into());
        };

        if function.parameters.len() != arguments.len() {
            return Err(RuntimeError::ArityMismatch {
                expected: function.parameters.len(),
                found: arguments.len(),
            }
            .into());
        }

        let call_env = Env::enclosed(&function.env);
        self.track_scope(&call_env);
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            call_env.set(parameter.value.as_str(), argument);
        }

        match self.eval_block(&function.body, &call_env) {
            Err(Unwind::Return(value)) => Ok(value),
            other => other,
        }
    }

    fn track_scope(&mut self, scope: &Env) {
        if self.scopes.len() == self.scopes.capacity() {
            self.scopes.retain(WeakEnv::is_alive);
        }
        self.scopes.push(scope.downgrade());
    }
}

/// Evaluates a program in a fresh environment.
///
/// # Errors
///
/// Returns the first [`RuntimeError`] raised.
pub fn evaluate(program: &Program) -> EvalResult<Option<Value>> {
    Interpreter::new().eval_program(program)
}

/// `!` inverts only `false`; every other operand gives `false`.
fn eval_prefix(operator: &str, right: &Value) -> Value {
    match operator {
        "!" => match right {
            Value::Boolean(false) => TRUE,
            _ => FALSE,
        },
        "-" => match right {
            Value::Integer(value) => Value::Integer(value.wrapping_neg()),
            _ => NULL,
        },
        _ => NULL,
    }
}

fn eval_infix(operator: &str, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => Ok(match operator {
            "==" => Value::from_bool(l == r),
            "!=" => Value::from_bool(l != r),
            _ => NULL,
        }),
        _ => Ok(NULL),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> EvalResult<Value> {
    let value = match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        }
        "<" => Value::from_bool(left < right),
        ">" => Value::from_bool(left > right),
        "==" => Value::from_bool(left == right),
        "!=" => Value::from_bool(left != right),
        _ => NULL,
    };
    Ok(value)
}
