use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operation on a value.
///
/// Supported operators:
/// - `Not`: the negated truthiness of any value. Only `null` and `false` are
///   falsy, so `!0` is `false`.
/// - `Negate`: arithmetic negation, defined only for integers. Negating
///   `i64::MIN` wraps.
///
/// # Errors
/// `UnknownPrefixOperator` when `-` is applied to a non-integer.
///
/// # Example
/// ```
/// use monkey::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Value},
/// };
///
/// let v = eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_prefix(PrefixOperator::Not, &Value::Null).unwrap();
/// assert_eq!(v, Value::Boolean(true));
///
/// let err = eval_prefix(PrefixOperator::Negate, &Value::Boolean(true)).unwrap_err();
/// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
/// ```
pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match (operator, right) {
        (PrefixOperator::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
        (PrefixOperator::Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
        (PrefixOperator::Negate, other) => {
            Err(RuntimeError::UnknownPrefixOperator { operator,
                                                      operand: other.kind() })
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn negation_wraps_at_the_minimum() {
        assert_eq!(eval_prefix(PrefixOperator::Negate, &Value::Integer(i64::MIN)),
                   Ok(Value::Integer(i64::MIN)));
    }

    #[test]
    fn not_follows_truthiness() {
        let cases = [(Value::Boolean(true), false),
                     (Value::Boolean(false), true),
                     (Value::Null, true),
                     (Value::Integer(0), false),
                     (Value::from(""), false)];

        for (value, expected) in cases {
            assert_eq!(eval_prefix(PrefixOperator::Not, &value), Ok(Value::Boolean(expected)));
        }
    }

    #[test]
    fn negate_error_names_the_operand() {
        let err = eval_prefix(PrefixOperator::Negate, &Value::from(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "unknown operator: -ARRAY");
    }
}
