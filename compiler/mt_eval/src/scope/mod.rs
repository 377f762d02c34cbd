//! Variable storage.
//!
//! The evaluator reads and writes session variables only through the
//! [`Scope`] trait, so a front end can supply its own store. Block
//! parameters never land here: they live in activation records owned by
//! the interpreter (see `interpreter::frame`).

use rustc_hash::FxHashMap;

use crate::Value;

/// Name-to-value storage owned by the caller.
pub trait Scope {
    fn get(&self, name: &str) -> Option<Value>;

    fn set(&mut self, name: &str, value: Value);

    /// Remove a binding, returning the previous value.
    fn delete(&mut self, name: &str) -> Option<Value>;

    /// All bound names, in no particular order.
    fn names(&self) -> Vec<String>;
}

/// Default session scope backed by a hash map.
#[derive(Default, Debug)]
pub struct GlobalScope {
    bindings: FxHashMap<String, Value>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Scope for GlobalScope {
    fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: Value) {
        tracing::trace!(name, "scope set");
        self.bindings.insert(name.to_string(), value);
    }

    fn delete(&mut self, name: &str) -> Option<Value> {
        self.bindings.remove(name)
    }

    fn names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests;
