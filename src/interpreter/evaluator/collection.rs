use std::{collections::HashMap, io::Write, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, Evaluator},
        value::core::{HashPair, Value},
    },
    util::num::index_from_i64,
};

impl<W: Write> Evaluator<W> {
    /// Evaluates expressions left to right, stopping at the first error.
    pub(crate) fn eval_expressions(&mut self, exprs: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| self.eval(expr, env)).collect()
    }

    /// Evaluates a hash literal.
    ///
    /// Each key is evaluated before its value, pairs in source order. A
    /// repeated key keeps the last value.
    ///
    /// # Errors
    /// The first evaluation error, or `UnusableHashKey` for a key that is not
    /// an integer, boolean or string.
    pub(crate) fn eval_hash_literal(&mut self,
                                    pairs: &[(Expr, Expr)],
                                    env: &Env)
                                    -> EvalResult<Value> {
        let mut map = HashMap::with_capacity(pairs.len());

        for (key_expr, value_expr) in pairs {
            let key = self.eval(key_expr, env)?;
            let hash_key = key.hash_key()?;
            let value = self.eval(value_expr, env)?;
            map.insert(hash_key, HashPair { key, value });
        }

        Ok(Value::Hash(Rc::new(map)))
    }
}

/// Evaluates `left[index]`.
///
/// - Array with integer index: the element, or `null` when the index is out
///   of range (negative indexes included).
/// - Hash: the value stored under the key, or `null` when absent.
///
/// # Errors
/// `UnusableHashKey` for an unhashable key on a hash, `IndexNotSupported` for
/// every other combination.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::collection::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
/// assert_eq!(eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(2));
/// assert_eq!(eval_index(&array, &Value::Integer(-1)).unwrap(), Value::Null);
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            Ok(index_from_i64(*i).and_then(|i| elements.get(i))
                                 .cloned()
                                 .unwrap_or(Value::Null))
        },
        (Value::Hash(pairs), key) => {
            let key = key.hash_key()?;
            Ok(pairs.get(&key).map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.kind() }),
    }
}
