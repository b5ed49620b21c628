use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an [`Environment`].
///
/// Function values and the evaluator hold these handles; a frame lives as
/// long as any closure still refers to it.
pub type Env = Rc<RefCell<Environment>>;

/// One frame of name bindings, optionally chained to an enclosing frame.
///
/// Lookups walk outward through the chain; bindings are always written to
/// the frame itself and never to an enclosing one.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an empty top-level environment behind a shared handle.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new_shared();
    /// env.borrow_mut().set("x", Value::Integer(1));
    /// assert_eq!(env.borrow().get("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn new_shared() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty frame enclosed by `outer`.
    #[must_use]
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(outer), }))
    }

    /// Retrieves a binding, searching this frame first and then each
    /// enclosing frame outward.
    ///
    /// # Parameters
    /// - `name`: The name to resolve.
    ///
    /// # Returns
    /// A copy of the bound value, or `None` if no frame in the chain binds
    /// the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this frame, replacing any previous binding here.
    ///
    /// Enclosing frames are never modified, so a binding in an inner frame
    /// shadows an outer one with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_through_enclosing_frames() {
        let global = Environment::new_shared();
        global.borrow_mut().set("a", Value::Integer(1));

        let inner = Environment::new_enclosed(Rc::clone(&global));
        let innermost = Environment::new_enclosed(Rc::clone(&inner));

        assert_eq!(innermost.borrow().get("a"), Some(Value::Integer(1)));
        assert_eq!(innermost.borrow().get("b"), None);
    }

    #[test]
    fn inner_bindings_shadow_without_touching_outer() {
        let global = Environment::new_shared();
        global.borrow_mut().set("x", Value::Integer(1));

        let inner = Environment::new_enclosed(Rc::clone(&global));
        inner.borrow_mut().set("x", Value::Integer(2));

        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
        assert_eq!(global.borrow().get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn rebinding_replaces_in_place() {
        let env = Environment::new_shared();
        env.borrow_mut().set("x", Value::Integer(1));
        env.borrow_mut().set("x", Value::from("one"));
        assert_eq!(env.borrow().get("x"), Some(Value::from("one")));
    }

    #[test]
    fn later_outer_bindings_are_visible() {
        let global = Environment::new_shared();
        let inner = Environment::new_enclosed(Rc::clone(&global));
        global.borrow_mut().set("late", Value::Boolean(true));
        assert_eq!(inner.borrow().get("late"), Some(Value::Boolean(true)));
    }
}
