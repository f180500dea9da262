//! The per-frame binding map.
//!
//! A [`Scope`] is string-keyed, holds the distinguished anonymous slot
//! `_`, and is never shared across frames (invariant I4): a subroutine
//! call starts a fresh scope seeded only with `_` and `args`, and the
//! callee's scope is discarded when the call returns.
//!
//! Slot names are interned (via [`gnd_base::Interner`]) rather than
//! compared as raw strings: a deep instruction stream re-reads the same
//! handful of slot names on every iteration, so resolving a name to a
//! [`Symbol`] once per `set`/`get` call and hashing the symbol instead of
//! the string keeps lookups cheap without changing any observable
//! behavior (slot identity is still exactly string equality).

use crate::value::Value;
use gnd_base::{Interner, Symbol};
use gnd_syntax::ANONYMOUS_SLOT;
use std::collections::HashMap;

/// A binding map from slot name to value.
#[derive(Debug)]
pub struct Scope {
    interner: Interner,
    bindings: HashMap<Symbol, Value>,
}

impl Scope {
    /// An empty scope with `_` bound to `Nil`.
    pub fn new() -> Self {
        let mut scope = Scope {
            interner: Interner::new(),
            bindings: HashMap::new(),
        };
        scope.set(ANONYMOUS_SLOT, Value::Nil);
        scope
    }

    /// A fresh subroutine-call scope: `_` and `args` both bound to `value`.
    ///
    /// The caller's scope is not visible here and this scope is not
    /// visible to the caller after the call returns.
    pub fn for_call(value: Value) -> Self {
        let mut scope = Scope {
            interner: Interner::new(),
            bindings: HashMap::new(),
        };
        scope.set(ANONYMOUS_SLOT, value.clone());
        scope.set("args", value);
        scope
    }

    /// Looks up a slot's current value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let sym = self.interner.lookup(name)?;
        self.bindings.get(&sym)
    }

    /// Binds a slot to a value, overwriting any existing binding.
    pub fn set(&mut self, name: &str, value: Value) {
        let sym = self.interner.intern(name);
        self.bindings.insert(sym, value);
    }

    /// The current value of the anonymous slot `_`.
    pub fn current(&self) -> Value {
        self.get(ANONYMOUS_SLOT).cloned().unwrap_or(Value::Nil)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
