//! Variable store for the interpreter.
//!
//! One flat global namespace per running script (the language has no
//! lexical scoping), owned by the statement executor and passed by
//! reference into expression evaluation.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Flat name-to-value mapping for a running script.
///
/// Assignment replaces the prior binding; its heap payload is released by
/// the reference count when the last handle drops, so a replaced value that
/// is still held by an in-flight expression stays alive until that
/// expression is done with it.
#[derive(Debug, Default)]
pub struct Environment {
    /// Variable bindings (`FxHashMap` for faster hashing with string keys).
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create a new empty store.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `name` to `value`, replacing any prior binding.
    #[inline]
    pub fn set(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up a variable by exact name.
    ///
    /// Returns a clone of the stored value (heap payloads are shared by
    /// reference count, see [`crate::value::Heap`]); unresolved names
    /// evaluate to `Nil` silently.
    #[inline]
    pub fn get(&self, name: &str) -> Value {
        self.bindings.get(name).cloned().unwrap_or(Value::Nil)
    }

    /// Number of distinct bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the store has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn set_then_get() {
        let mut env = Environment::new();
        env.set("x", Value::Int(42));
        assert_eq!(env.get("x"), Value::Int(42));
    }

    #[test]
    fn unresolved_name_is_nil() {
        let env = Environment::new();
        assert_eq!(env.get("missing"), Value::Nil);
    }

    #[test]
    fn set_overwrites_existing_binding() {
        let mut env = Environment::new();
        env.set("x", Value::Int(1));
        env.set("x", Value::string("two"));
        assert_eq!(env.get("x"), Value::string("two"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn reassignment_releases_prior_value_exactly_once() {
        let v1 = Value::string("first");
        let v1_handle = match &v1 {
            Value::Str(h) => h.clone(),
            _ => unreachable!(),
        };

        let mut env = Environment::new();
        env.set("x", v1);
        assert_eq!(Rc::strong_count(v1_handle.inner()), 2);

        // Overwriting drops the store's handle; ours keeps the buffer alive.
        env.set("x", Value::string("second"));
        assert_eq!(Rc::strong_count(v1_handle.inner()), 1);
        assert_eq!(env.get("x"), Value::string("second"));
    }

    #[test]
    fn get_shares_storage_with_store() {
        let mut env = Environment::new();
        env.set("t", Value::table(vec![Value::Int(1)]));

        let looked_up = env.get("t");
        let again = env.get("t");
        if let (Value::Table(a), Value::Table(b)) = (&looked_up, &again) {
            assert!(Rc::ptr_eq(a.inner(), b.inner()));
        } else {
            unreachable!();
        }
    }
}
