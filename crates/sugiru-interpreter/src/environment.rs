//! Name bindings.
//!
//! An [`Environment`] maps names to values and may have an enclosing
//! environment that lookups fall back to. Environments are shared through
//! the [`Env`] handle: closures keep the environment they were created in,
//! and each call runs in a fresh environment enclosed by that one.

use crate::value::Value;
use fxhash::FxBuildHasher;
use hashbrown::HashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// One scope of bindings.
///
/// Names are short identifiers, so the map uses the Fx hasher.
#[derive(Default)]
pub struct Environment {
    values: HashMap<String, Value, FxBuildHasher>,
    enclosing: Option<Env>,
}

/// Shared, mutable handle to an [`Environment`].
///
/// Cloning the handle shares the scope; it does not copy the bindings.
#[derive(Clone, Default)]
pub struct Env(Rc<RefCell<Environment>>);

/// Handle to an [`Environment`] that does not keep it alive.
#[derive(Clone, Debug)]
pub struct WeakEnv(Weak<RefCell<Environment>>);

impl Env {
    /// Creates an empty top-level environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Self {
        Env(Rc::new(RefCell::new(Environment {
            values: HashMap::default(),
            enclosing: Some(outer.clone()),
        })))
    }

    /// Looks `name` up in this scope, then in each enclosing scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let env = self.0.borrow();
        if let Some(value) = env.values.get(name) {
            return Some(value.clone());
        }
        env.enclosing.as_ref()?.get(name)
    }

    /// Binds `name` in this scope, shadowing any outer binding and replacing
    /// an existing binding in this scope.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Returns `true` if `name` is bound in this scope itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().values.contains_key(name)
    }

    /// Removes every binding in this scope and detaches it from its
    /// enclosing scope.
    ///
    /// A function bound in the scope it captured keeps that scope alive
    /// through its own binding; clearing the scope breaks the cycle.
    pub fn clear(&self) {
        let mut env = self.0.borrow_mut();
        env.values.clear();
        env.enclosing = None;
    }

    /// Returns a handle that does not keep this scope alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakEnv {
        WeakEnv(Rc::downgrade(&self.0))
    }

    /// Returns the names bound in this scope, sorted.
    #[must_use]
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.0.borrow().values.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl WeakEnv {
    /// Returns the scope if something still holds it.
    #[must_use]
    pub fn upgrade(&self) -> Option<Env> {
        self.0.upgrade().map(Env)
    }

    /// Returns `true` while something still holds the scope.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let env = self.0.borrow();
        f.debug_struct("Env")
            .field("names", &self.local_names())
            .field("enclosed", &env.enclosing.is_some())
            .finish()
    }
}
